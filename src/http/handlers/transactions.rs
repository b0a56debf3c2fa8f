//! Transaction route handlers.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::backend::{PurchaseOrder, SaleOrder};
use crate::http::dto::{Message, TransactionRecord};
use crate::http::error::{require, ApiError};
use crate::http::outcome::{self, Outcome};
use crate::http::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PurchaseParams {
    /// ID do usuário (required).
    pub user_id: Option<String>,
    /// Valor em BRL para compra de USD (required).
    pub valor_brl: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SaleParams {
    /// ID do usuário (required).
    pub user_id: Option<String>,
    /// Quantidade em USD para vender (required).
    pub quantidade_usd: Option<String>,
}

/// Register a dollar purchase.
#[utoipa::path(
    post,
    path = "/transactions/compra",
    tag = "transactions",
    params(PurchaseParams),
    responses(
        (status = 201, description = "Compra registrada", body = TransactionRecord),
        (status = 400, description = "Dados inválidos ou campo obrigatório ausente", body = Message),
        (status = 404, description = "Usuário não encontrado", body = Message),
        (status = 500, description = "Erro ao registrar compra", body = Message)
    ),
    operation_id = "register_purchase"
)]
pub async fn register_purchase(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PurchaseParams>,
) -> Result<Outcome, ApiError> {
    let order = PurchaseOrder {
        user_id: require(params.user_id, "user_id")?,
        valor_brl: require(params.valor_brl, "valor_brl")?,
    };

    Ok(outcome::register_purchase(
        state.ledger.register_purchase(&order).await,
    ))
}

/// Register a dollar sale.
#[utoipa::path(
    post,
    path = "/transactions/venda",
    tag = "transactions",
    params(SaleParams),
    responses(
        (status = 201, description = "Venda registrada", body = TransactionRecord),
        (status = 400, description = "Dados inválidos, saldo insuficiente ou campo obrigatório ausente", body = Message),
        (status = 404, description = "Usuário não encontrado", body = Message),
        (status = 500, description = "Erro ao registrar venda", body = Message)
    ),
    operation_id = "register_sale"
)]
pub async fn register_sale(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SaleParams>,
) -> Result<Outcome, ApiError> {
    let order = SaleOrder {
        user_id: require(params.user_id, "user_id")?,
        quantidade_usd: require(params.quantidade_usd, "quantidade_usd")?,
    };

    Ok(outcome::register_sale(
        state.ledger.register_sale(&order).await,
    ))
}

/// Fetch one transaction.
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = i64, Path, description = "ID da transação")),
    responses(
        (status = 200, description = "Transação", body = TransactionRecord),
        (status = 404, description = "Transação não encontrada", body = Message),
        (status = 500, description = "Erro ao obter transação", body = Message)
    ),
    operation_id = "get_transaction"
)]
pub async fn get_transaction(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Outcome {
    outcome::get_transaction(state.ledger.get_transaction(id).await)
}
