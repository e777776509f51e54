pub mod csv;
pub mod humanize;
