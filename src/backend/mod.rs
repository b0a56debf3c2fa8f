//! Backend clients.
//!
//! Ports (traits) for the two backend services plus their
//! reqwest-backed implementations. All persistence lives behind these
//! services; the gateway only relays requests.

mod error;
mod ledger_service;
mod ports;
mod transport;
mod user_service;

pub use error::TransportError;
pub use ledger_service::{HttpLedgerService, HttpLedgerServiceConfig};
pub use ports::{
    BackendResult, LedgerServicePort, NewUser, PurchaseOrder, SaleOrder, UserServicePort,
    UserUpdate,
};
pub use user_service::{HttpUserService, HttpUserServiceConfig};
