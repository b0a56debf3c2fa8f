//! Data transfer objects.
//!
//! Backend bodies are relayed as raw JSON (the gateway never assumes
//! their shape), so the structs here serve two purposes: the uniform
//! error body, and the OpenAPI schemas mirroring the backend payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body: every error response the gateway produces
/// itself is `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User as the user-management backend shapes it. Documentation only;
/// responses are relayed without deserializing into this type.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRecord {
    pub id: i64,
    pub nome_completo: String,
    pub email: String,
    pub cpf: String,
    pub cep: String,
    pub complemento: Option<String>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub estado: Option<String>,
}

/// Transaction as the ledger backend shapes it. Documentation only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: i64,
    /// "compra" or "venda".
    pub tipo: String,
    pub quantidade_usd: f64,
    pub valor_brl: f64,
    pub cotacao: f64,
    pub data_transacao: String,
}

/// USD balance of a user. Documentation only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BalanceView {
    pub saldo_usd: f64,
}
