//! CSV adapters: scripted operations in, account statements out.

pub mod operation_reader;
pub mod statement_writer;
