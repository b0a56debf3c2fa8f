//! Backend service ports.
//!
//! Abstract interfaces over the two backend services. The HTTP
//! implementations live next to them in this module; route handlers
//! depend only on the traits so they can be tested against stubs.

use async_trait::async_trait;
use serde_json::Value;

use super::error::TransportError;

/// Result of an outbound backend call.
///
/// `Ok` carries the parsed JSON body as the backend sent it. The
/// gateway never assumes fields beyond the generic `message` error
/// indicator and never does arithmetic on monetary values.
pub type BackendResult = Result<Value, TransportError>;

/// Payload for user creation. All fields are forwarded as query
/// parameters under these exact names.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nome_completo: String,
    pub email: String,
    pub senha: String,
    pub cpf: String,
    pub cep: String,
    /// Optional on the inbound side; the backend contract expects the
    /// key to always be present, so absent maps to empty string.
    pub complemento: String,
}

impl NewUser {
    /// Query parameters in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("nome_completo", self.nome_completo.as_str()),
            ("email", self.email.as_str()),
            ("senha", self.senha.as_str()),
            ("cpf", self.cpf.as_str()),
            ("cep", self.cep.as_str()),
            ("complemento", self.complemento.as_str()),
        ]
    }
}

/// Partial-update payload for a user. Only `Some` fields are sent to
/// the backend; `None` means "not provided", which is distinct from an
/// explicitly supplied empty string ("clear this field").
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub nome_completo: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub cep: Option<String>,
    pub complemento: Option<String>,
}

impl UserUpdate {
    /// Query parameters for the provided fields only.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.nome_completo {
            pairs.push(("nome_completo", v.as_str()));
        }
        if let Some(v) = &self.email {
            pairs.push(("email", v.as_str()));
        }
        if let Some(v) = &self.senha {
            pairs.push(("senha", v.as_str()));
        }
        if let Some(v) = &self.cep {
            pairs.push(("cep", v.as_str()));
        }
        if let Some(v) = &self.complemento {
            pairs.push(("complemento", v.as_str()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Dollar purchase order. Values are forwarded as received; the ledger
/// service parses and validates them.
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    pub user_id: String,
    pub valor_brl: String,
}

/// Dollar sale order.
#[derive(Debug, Clone)]
pub struct SaleOrder {
    pub user_id: String,
    pub quantidade_usd: String,
}

/// User-management service port (user CRUD + CEP lookup).
#[async_trait]
pub trait UserServicePort: Send + Sync {
    /// List all users.
    async fn list_users(&self) -> BackendResult;

    /// Create a user.
    async fn create_user(&self, user: &NewUser) -> BackendResult;

    /// Fetch a single user by id.
    async fn get_user(&self, id: i64) -> BackendResult;

    /// Update a user; only the fields present in `changes` are sent.
    async fn update_user(&self, id: i64, changes: &UserUpdate) -> BackendResult;

    /// Delete a user. No body on success.
    async fn delete_user(&self, id: i64) -> Result<(), TransportError>;

    /// Address lookup by CEP. Part of the outbound contract; no inbound
    /// route currently uses it.
    async fn lookup_cep(&self, cep: &str) -> BackendResult;
}

/// Quote/ledger service port.
#[async_trait]
pub trait LedgerServicePort: Send + Sync {
    /// Current USD/BRL quote. Part of the outbound contract; no inbound
    /// route currently uses it.
    async fn get_rate(&self) -> BackendResult;

    /// Register a dollar purchase.
    async fn register_purchase(&self, order: &PurchaseOrder) -> BackendResult;

    /// Register a dollar sale.
    async fn register_sale(&self, order: &SaleOrder) -> BackendResult;

    /// Fetch a single transaction by id.
    async fn get_transaction(&self, id: i64) -> BackendResult;

    /// Fetch a user's USD balance.
    async fn get_balance(&self, user_id: i64) -> BackendResult;
}
