//! HTTP handlers.

mod ping;
mod transactions;
mod users;

pub use ping::*;
pub use transactions::*;
pub use users::*;
