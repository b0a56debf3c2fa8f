//! OpenAPI documentation.
//!
//! Generates the machine-readable API description, published at
//! `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use super::dto::{BalanceView, Message, TransactionRecord, UserRecord};

/// OpenAPI document for the gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Principal do Sistema de Câmbio",
        description = "API para gerenciamento de usuários e transações de câmbio",
        version = "1.0"
    ),
    paths(
        crate::http::handlers::list_users,
        crate::http::handlers::create_user,
        crate::http::handlers::get_user,
        crate::http::handlers::update_user,
        crate::http::handlers::delete_user,
        crate::http::handlers::get_user_balance,
        crate::http::handlers::register_purchase,
        crate::http::handlers::register_sale,
        crate::http::handlers::get_transaction,
    ),
    components(schemas(UserRecord, TransactionRecord, BalanceView, Message)),
    tags(
        (name = "users", description = "Operações relacionadas a usuários"),
        (name = "transactions", description = "Operações relacionadas a transações")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
