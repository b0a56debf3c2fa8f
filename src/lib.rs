//! cambio-gateway - HTTP gateway for the currency-exchange platform.
//!
//! The gateway fronts two backend services that hold all state:
//! - user-management service: user CRUD and CEP address lookup
//! - quote/ledger service: USD/BRL quote, purchases, sales, balances
//!
//! Layers:
//! - `config`: layered configuration (env > file > defaults)
//! - `backend`: one client function per backend operation, behind ports
//! - `http`: route handlers, the outcome mapper that turns backend
//!   results into status codes, server assembly and OpenAPI docs

pub mod backend;
pub mod config;
pub mod http;

pub use config::{load_config, AppConfig};
