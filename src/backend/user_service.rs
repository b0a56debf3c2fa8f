//! HTTP client for the user-management backend.
//!
//! Backend API (all state lives there):
//! - GET    /usuarios
//! - POST   /usuarios?nome_completo=&email=&senha=&cpf=&cep=&complemento=
//! - GET    /usuarios/{id}
//! - PUT    /usuarios/{id}?<provided fields only>
//! - DELETE /usuarios/{id}
//! - GET    /cep/{cep}

use async_trait::async_trait;
use reqwest::Client;

use super::error::TransportError;
use super::ports::{BackendResult, NewUser, UserServicePort, UserUpdate};
use super::transport::{send_json, send_no_body};

/// User service client configuration.
#[derive(Debug, Clone)]
pub struct HttpUserServiceConfig {
    /// Base URL of the user-management service.
    pub base_url: String,
}

impl Default for HttpUserServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api-secundaria-viacep:5001".to_string(),
        }
    }
}

impl HttpUserServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// reqwest-backed implementation of [`UserServicePort`].
///
/// No timeout is configured beyond the transport default; a hung
/// backend call hangs the serving worker for that request.
pub struct HttpUserService {
    client: Client,
    config: HttpUserServiceConfig,
}

impl HttpUserService {
    pub fn new(config: HttpUserServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn users_url(&self) -> String {
        format!("{}/usuarios", self.config.base_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/usuarios/{}", self.config.base_url, id)
    }

    fn cep_url(&self, cep: &str) -> String {
        format!("{}/cep/{}", self.config.base_url, cep)
    }
}

#[async_trait]
impl UserServicePort for HttpUserService {
    async fn list_users(&self) -> BackendResult {
        send_json("list_users", self.client.get(self.users_url())).await
    }

    async fn create_user(&self, user: &NewUser) -> BackendResult {
        let request = self
            .client
            .post(self.users_url())
            .query(&user.query_pairs());
        send_json("create_user", request).await
    }

    async fn get_user(&self, id: i64) -> BackendResult {
        send_json("get_user", self.client.get(self.user_url(id))).await
    }

    async fn update_user(&self, id: i64, changes: &UserUpdate) -> BackendResult {
        let request = self
            .client
            .put(self.user_url(id))
            .query(&changes.query_pairs());
        send_json("update_user", request).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), TransportError> {
        send_no_body("delete_user", self.client.delete(self.user_url(id))).await
    }

    async fn lookup_cep(&self, cep: &str) -> BackendResult {
        send_json("lookup_cep", self.client.get(self.cep_url(cep))).await
    }
}
