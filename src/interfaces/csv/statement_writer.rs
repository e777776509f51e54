use crate::domain::account::CurrentAccount;
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of an account statement.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatementRow {
    pub branch: i32,
    pub number: i32,
    pub balance: Money,
    pub failed_withdrawals: u32,
    pub failed_transfers: u32,
}

impl From<&CurrentAccount> for StatementRow {
    fn from(account: &CurrentAccount) -> Self {
        Self {
            branch: account.branch(),
            number: account.number(),
            balance: account.balance(),
            failed_withdrawals: account.failed_withdrawals(),
            failed_transfers: account.failed_transfers(),
        }
    }
}

/// Writes account statements as CSV, header first.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts<'a>(
        &mut self,
        accounts: impl IntoIterator<Item = &'a CurrentAccount>,
    ) -> Result<()> {
        for account in accounts {
            self.writer.serialize(StatementRow::from(account))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
