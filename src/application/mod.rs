//! Application layer orchestrating the domain for the console program.
//!
//! The `Session` owns a source and a destination account opened against one
//! registry and applies scripted operations to them, one at a time.

pub mod session;
