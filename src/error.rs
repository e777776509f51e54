use crate::domain::money::Money;
use thiserror::Error;

/// A withdrawal asked for more than the account holds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("insufficient balance: balance is {balance}, requested {requested}")]
pub struct InsufficientBalance {
    pub balance: Money,
    pub requested: Money,
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
    #[error(transparent)]
    InsufficientBalance(#[from] InsufficientBalance),
    #[error("transfer not performed: {source}")]
    TransferFailed {
        #[source]
        source: InsufficientBalance,
    },
    #[error("invalid date `{input}`: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AccountError>;
