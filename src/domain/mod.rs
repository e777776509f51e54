//! Domain model: the current account entity, the registry it is opened
//! against, and the values flowing through its operations.

pub mod account;
pub mod client;
pub mod money;
pub mod operation;
pub mod registry;
