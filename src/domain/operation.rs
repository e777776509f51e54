use super::money::Money;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdrawal,
    Transfer,
}

/// A single scripted operation against an account.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Operation {
    pub r#type: OperationType,
    pub amount: Money,
}
