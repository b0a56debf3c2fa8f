//! Application state.

use std::sync::Arc;

use crate::backend::{LedgerServicePort, UserServicePort};

/// Shared state handed to every route handler.
///
/// Holds only the two backend ports; handlers keep no cross-request
/// state of their own.
pub struct AppState {
    pub users: Arc<dyn UserServicePort>,
    pub ledger: Arc<dyn LedgerServicePort>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserServicePort>, ledger: Arc<dyn LedgerServicePort>) -> Self {
        Self { users, ledger }
    }
}
