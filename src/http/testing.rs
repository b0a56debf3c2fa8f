//! Test support: stub backend services and router helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::backend::{
    BackendResult, LedgerServicePort, NewUser, PurchaseOrder, SaleOrder, TransportError,
    UserServicePort, UserUpdate,
};
use crate::http::routes::create_routes;
use crate::http::state::AppState;

/// Canned reply for every call on a stubbed backend.
#[derive(Clone)]
pub enum Reply {
    Body(Value),
    Transport,
}

impl Reply {
    fn to_result(&self) -> BackendResult {
        match self {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Transport => Err(TransportError::Connect("stub: connection refused".into())),
        }
    }
}

/// Stub [`UserServicePort`] counting calls and recording the last
/// update payload.
pub struct StubUserService {
    reply: Reply,
    delete_ok: bool,
    calls: AtomicUsize,
    last_update: Mutex<Option<UserUpdate>>,
}

impl StubUserService {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delete_ok: true,
            calls: AtomicUsize::new(0),
            last_update: Mutex::new(None),
        })
    }

    pub fn transport_failure() -> Arc<Self> {
        Self::new(Reply::Transport)
    }

    pub fn with_delete(ok: bool) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Transport,
            delete_ok: ok,
            calls: AtomicUsize::new(0),
            last_update: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_update(&self) -> Option<UserUpdate> {
        self.last_update.lock().unwrap().clone()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserServicePort for StubUserService {
    async fn list_users(&self) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn create_user(&self, _user: &NewUser) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn get_user(&self, _id: i64) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn update_user(&self, _id: i64, changes: &UserUpdate) -> BackendResult {
        self.record();
        *self.last_update.lock().unwrap() = Some(changes.clone());
        self.reply.to_result()
    }

    async fn delete_user(&self, _id: i64) -> Result<(), TransportError> {
        self.record();
        if self.delete_ok {
            Ok(())
        } else {
            Err(TransportError::Status(500))
        }
    }

    async fn lookup_cep(&self, _cep: &str) -> BackendResult {
        self.record();
        self.reply.to_result()
    }
}

/// Stub [`LedgerServicePort`] counting calls.
pub struct StubLedgerService {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubLedgerService {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn transport_failure() -> Arc<Self> {
        Self::new(Reply::Transport)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl LedgerServicePort for StubLedgerService {
    async fn get_rate(&self) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn register_purchase(&self, _order: &PurchaseOrder) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn register_sale(&self, _order: &SaleOrder) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn get_transaction(&self, _id: i64) -> BackendResult {
        self.record();
        self.reply.to_result()
    }

    async fn get_balance(&self, _user_id: i64) -> BackendResult {
        self.record();
        self.reply.to_result()
    }
}

/// Router wired to the given stubs, without middleware layers.
pub fn test_app(users: Arc<StubUserService>, ledger: Arc<StubLedgerService>) -> Router {
    create_routes().with_state(Arc::new(AppState::new(users, ledger)))
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
