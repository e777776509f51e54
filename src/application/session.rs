use crate::domain::account::CurrentAccount;
use crate::domain::operation::{Operation, OperationType};
use crate::domain::registry::AccountRegistry;
use crate::error::Result;
use tracing::debug;

/// Applies scripted operations to a source account, sending transfers to a
/// fixed destination account.
///
/// Both accounts are opened against the same registry, so the session's
/// operation fee reflects the two of them plus anything opened earlier.
pub struct Session {
    registry: AccountRegistry,
    source: CurrentAccount,
    destination: CurrentAccount,
}

impl Session {
    /// Opens the source and destination accounts.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry both accounts are recorded in.
    /// * `source` - Branch and number of the account operations apply to.
    /// * `destination` - Branch and number of the account receiving transfers.
    pub fn open(
        registry: AccountRegistry,
        source: (i32, i32),
        destination: (i32, i32),
    ) -> Result<Self> {
        let source = CurrentAccount::open(&registry, source.0, source.1)?;
        let destination = CurrentAccount::open(&registry, destination.0, destination.1)?;
        Ok(Self {
            registry,
            source,
            destination,
        })
    }

    /// Applies one operation. A rejected operation leaves both balances as
    /// they were, apart from the source's failure counters.
    pub fn apply(&mut self, operation: Operation) -> Result<()> {
        debug!(?operation, "applying operation");
        match operation.r#type {
            OperationType::Deposit => {
                self.source.deposit(operation.amount);
                Ok(())
            }
            OperationType::Withdrawal => self.source.withdraw(operation.amount),
            OperationType::Transfer => self
                .source
                .transfer(operation.amount, &mut self.destination),
        }
    }

    pub fn source(&self) -> &CurrentAccount {
        &self.source
    }

    pub fn destination(&self) -> &CurrentAccount {
        &self.destination
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Consumes the session and returns the source and destination accounts.
    pub fn into_accounts(self) -> (CurrentAccount, CurrentAccount) {
        (self.source, self.destination)
    }
}
