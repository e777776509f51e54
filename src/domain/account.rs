use super::client::Client;
use super::money::Money;
use super::registry::AccountRegistry;
use crate::error::{AccountError, InsufficientBalance, Result};
use rust_decimal_macros::dec;
use tracing::debug;

/// Balance every new account starts with.
pub const OPENING_BALANCE: Money = Money::new(dec!(100));

/// A current account at a given branch.
///
/// Branch and number are fixed at construction. The balance can only be
/// driven below zero by a negative deposit; the setter and withdrawals both
/// refuse to do so.
#[derive(Debug)]
pub struct CurrentAccount {
    branch: i32,
    number: i32,
    balance: Money,
    holder: Option<Client>,
    failed_withdrawals: u32,
    failed_transfers: u32,
    registry: AccountRegistry,
}

fn invalid(argument: &'static str, reason: &'static str) -> AccountError {
    AccountError::InvalidArgument { argument, reason }
}

impl CurrentAccount {
    /// Opens an account and records it in `registry`, which recomputes the
    /// shared operation fee.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `branch` or `number` is not greater than zero. The
    /// registry is left untouched in that case.
    pub fn open(registry: &AccountRegistry, branch: i32, number: i32) -> Result<Self> {
        if branch <= 0 {
            return Err(invalid("branch", "must be greater than 0"));
        }
        if number <= 0 {
            return Err(invalid("number", "must be greater than 0"));
        }

        registry.register();

        Ok(Self {
            branch,
            number,
            balance: OPENING_BALANCE,
            holder: None,
            failed_withdrawals: 0,
            failed_transfers: 0,
            registry: registry.clone(),
        })
    }

    pub fn branch(&self) -> i32 {
        self.branch
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Assigns the balance unless `value` is negative, in which case the call
    /// is ignored. Returns whether the balance was changed.
    pub fn set_balance(&mut self, value: Money) -> bool {
        if value.is_negative() {
            return false;
        }
        self.balance = value;
        true
    }

    pub fn holder(&self) -> Option<&Client> {
        self.holder.as_ref()
    }

    pub fn set_holder(&mut self, holder: Client) {
        self.holder = Some(holder);
    }

    pub fn failed_withdrawals(&self) -> u32 {
        self.failed_withdrawals
    }

    pub fn failed_transfers(&self) -> u32 {
        self.failed_transfers
    }

    /// Fee currently shared by every account of this account's registry.
    pub fn operation_fee(&self) -> Money {
        self.registry.operation_fee()
    }

    pub fn total_accounts_created(&self) -> u32 {
        self.registry.total_created()
    }

    /// Withdraws `amount`, allowing the balance to reach exactly zero.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if `amount` is negative.
    /// * `InsufficientBalance` if `amount` exceeds the balance. The failed
    ///   withdrawal counter is incremented before the error is returned.
    pub fn withdraw(&mut self, amount: Money) -> Result<()> {
        if amount.is_negative() {
            return Err(invalid("amount", "withdrawal amount must not be negative"));
        }

        if self.balance < amount {
            self.failed_withdrawals += 1;
            debug!(
                branch = self.branch,
                number = self.number,
                balance = %self.balance,
                requested = %amount,
                "withdrawal rejected"
            );
            return Err(InsufficientBalance {
                balance: self.balance,
                requested: amount,
            }
            .into());
        }

        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance.
    ///
    /// The amount is not validated: a negative deposit lowers the balance and
    /// may leave it below zero.
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Moves `amount` from this account to `destination`.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if `amount` is negative.
    /// * `TransferFailed` wrapping the `InsufficientBalance` error if the
    ///   balance does not cover `amount`. Both failure counters are
    ///   incremented.
    pub fn transfer(&mut self, amount: Money, destination: &mut CurrentAccount) -> Result<()> {
        self.debit_for_transfer(amount)?;
        destination.deposit(amount);
        Ok(())
    }

    /// Transfers `amount` from this account back into itself. The balance is
    /// unchanged on success; failures are accounted as for [`transfer`].
    ///
    /// [`transfer`]: CurrentAccount::transfer
    pub fn transfer_to_self(&mut self, amount: Money) -> Result<()> {
        self.debit_for_transfer(amount)?;
        self.deposit(amount);
        Ok(())
    }

    fn debit_for_transfer(&mut self, amount: Money) -> Result<()> {
        if amount.is_negative() {
            return Err(invalid("amount", "transfer amount must not be negative"));
        }

        match self.withdraw(amount) {
            Err(AccountError::InsufficientBalance(cause)) => {
                self.failed_transfers += 1;
                debug!(
                    branch = self.branch,
                    number = self.number,
                    failed_transfers = self.failed_transfers,
                    "transfer rejected"
                );
                Err(AccountError::TransferFailed { source: cause })
            }
            other => other,
        }
    }
}
