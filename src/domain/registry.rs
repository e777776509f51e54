use super::money::Money;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Amount split across every account ever created to derive the operation fee.
pub const FEE_POOL: Money = Money::new(dec!(30));

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RegistryState {
    total_created: u32,
    operation_fee: Money,
}

/// Shared creation counter and operation fee for a family of accounts.
///
/// Cloning the registry yields another handle to the same state. The counter
/// increment and the fee recomputation happen under a single lock, so
/// concurrent constructions never observe a fee that disagrees with the count.
#[derive(Debug, Default, Clone)]
pub struct AccountRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts successfully constructed against this registry.
    pub fn total_created(&self) -> u32 {
        self.lock().total_created
    }

    /// Fee shared by every account, `30 / total_created`. Zero until the
    /// first account exists.
    pub fn operation_fee(&self) -> Money {
        self.lock().operation_fee
    }

    /// Restores the registry to its initial empty state.
    pub fn reset(&self) {
        *self.lock() = RegistryState::default();
    }

    /// Records one more account and returns the new total.
    pub(crate) fn register(&self) -> u32 {
        let mut state = self.lock();
        state.total_created += 1;
        state.operation_fee = FEE_POOL / state.total_created;
        debug!(
            total_created = state.total_created,
            operation_fee = %state.operation_fee,
            "account registered"
        );
        state.total_created
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
