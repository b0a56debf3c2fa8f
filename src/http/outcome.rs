//! Outcome mapper.
//!
//! Translates backend call results into the gateway-facing HTTP
//! status/body pair. This is the single place that interprets the
//! backends' error convention: a 2xx response whose body is an object
//! carrying a `message` key instead of the resource shape.
//!
//! The mapping is a per-operation decision table, not one generic
//! function, because each operation assigns different statuses to the
//! same indicator. The Portuguese substrings ("inválido",
//! "não encontrado", "já cadastrado", "insuficiente") are part of the
//! backend contract and must be preserved verbatim; the backends expose
//! no structured error code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::backend::{BackendResult, TransportError};

/// Gateway-facing result of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: StatusCode,
    /// `None` renders an empty body (204 delete).
    pub body: Option<Value>,
}

impl Outcome {
    fn ok(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    fn message(status: StatusCode, text: &str) -> Self {
        Self::ok(status, json!({ "message": text }))
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Extract the error-indicator message, if any.
///
/// The indicator is the presence of the `message` key; a non-string
/// value counts as present with empty text, so it falls through to each
/// operation's `else` branch.
fn error_indicator(body: &Value) -> Option<&str> {
    let message = body.as_object()?.get("message")?;
    Some(message.as_str().unwrap_or(""))
}

/// GET /users/ — lists have no error shape; any parsed body is the list.
pub fn list_users(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao obter usuários da API secundária",
        ),
        Ok(body) => Outcome::ok(StatusCode::OK, body),
    }
}

/// POST /users/ — "inválido" means bad input, anything else a
/// duplicate email/CPF.
pub fn create_user(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao criar usuário na API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(message) => {
                let status = if message.contains("inválido") {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::CONFLICT
                };
                Outcome::ok(status, body)
            }
            None => Outcome::ok(StatusCode::CREATED, body),
        },
    }
}

/// GET /users/{id} — any indicator means not found, regardless of text.
pub fn get_user(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao obter usuário da API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(_) => Outcome::message(StatusCode::NOT_FOUND, "Usuário não encontrado"),
            None => Outcome::ok(StatusCode::OK, body),
        },
    }
}

/// PUT /users/{id}.
pub fn update_user(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao atualizar usuário na API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(message) => {
                let status = if message.contains("não encontrado") {
                    StatusCode::NOT_FOUND
                } else if message.contains("inválido") {
                    StatusCode::BAD_REQUEST
                } else if message.contains("já cadastrado") {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                Outcome::ok(status, body)
            }
            None => Outcome::ok(StatusCode::OK, body),
        },
    }
}

/// DELETE /users/{id} — success has no body.
pub fn delete_user(result: Result<(), TransportError>) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao excluir usuário na API secundária",
        ),
        Ok(()) => Outcome::empty(StatusCode::NO_CONTENT),
    }
}

/// POST /transactions/compra.
pub fn register_purchase(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao registrar compra na API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(message) => {
                let status = if message.contains("não encontrado") {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::BAD_REQUEST
                };
                Outcome::ok(status, body)
            }
            None => Outcome::ok(StatusCode::CREATED, body),
        },
    }
}

/// POST /transactions/venda — "insuficiente" and the fallback both map
/// to 400; the distinction is kept for parity with the backend docs.
pub fn register_sale(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao registrar venda na API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(message) => {
                let status = if message.contains("não encontrado") {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::BAD_REQUEST
                };
                Outcome::ok(status, body)
            }
            None => Outcome::ok(StatusCode::CREATED, body),
        },
    }
}

/// GET /transactions/{id} — any indicator means not found.
pub fn get_transaction(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao obter transação da API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(_) => Outcome::message(StatusCode::NOT_FOUND, "Transação não encontrada"),
            None => Outcome::ok(StatusCode::OK, body),
        },
    }
}

/// GET /users/{id}/saldo — any indicator means the user is unknown.
pub fn get_balance(result: BackendResult) -> Outcome {
    match result {
        Err(_) => Outcome::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erro ao obter saldo da API secundária",
        ),
        Ok(body) => match error_indicator(&body) {
            Some(_) => Outcome::message(StatusCode::NOT_FOUND, "Usuário não encontrado"),
            None => Outcome::ok(StatusCode::OK, body),
        },
    }
}
