//! HTTP layer: routes, handlers, outcome mapping and server assembly.

pub mod doc;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod outcome;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
