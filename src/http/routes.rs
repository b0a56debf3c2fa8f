//! HTTP routes.
//!
//! Inbound surface (all inputs via query string, all outputs JSON):
//! - GET    /users/               list users
//! - POST   /users/               create user
//! - GET    /users/:id            fetch user
//! - PUT    /users/:id            partial update
//! - DELETE /users/:id            delete user
//! - GET    /users/:id/saldo      USD balance
//! - POST   /transactions/compra  register purchase
//! - POST   /transactions/venda   register sale
//! - GET    /transactions/:id     fetch transaction
//! - GET    /ping                 health check
//! - GET    /api-docs/openapi.json  machine-readable API documentation

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::doc;
use super::handlers;
use super::state::AppState;

/// Build the full route table.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/api-docs/openapi.json", get(doc::openapi_json))
        .merge(user_routes())
        .merge(transaction_routes())
}

fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/users/:id/saldo", get(handlers::get_user_balance))
}

fn transaction_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions/compra", post(handlers::register_purchase))
        .route("/transactions/venda", post(handlers::register_sale))
        .route("/transactions/:id", get(handlers::get_transaction))
}
