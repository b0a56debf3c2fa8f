//! HTTP client for the quote/ledger backend.
//!
//! Backend API:
//! - GET  /cotacao
//! - POST /transacoes/compra?user_id=&valor_brl=
//! - POST /transacoes/venda?user_id=&quantidade_usd=
//! - GET  /transacoes/{id}
//! - GET  /transacoes/usuario/{id}/saldo

use async_trait::async_trait;
use reqwest::Client;

use super::ports::{BackendResult, LedgerServicePort, PurchaseOrder, SaleOrder};
use super::transport::send_json;

/// Ledger service client configuration.
#[derive(Debug, Clone)]
pub struct HttpLedgerServiceConfig {
    /// Base URL of the quote/ledger service.
    pub base_url: String,
}

impl Default for HttpLedgerServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api-secundaria-frankfurter:5002".to_string(),
        }
    }
}

impl HttpLedgerServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// reqwest-backed implementation of [`LedgerServicePort`].
pub struct HttpLedgerService {
    client: Client,
    config: HttpLedgerServiceConfig,
}

impl HttpLedgerService {
    pub fn new(config: HttpLedgerServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn rate_url(&self) -> String {
        format!("{}/cotacao", self.config.base_url)
    }

    fn purchase_url(&self) -> String {
        format!("{}/transacoes/compra", self.config.base_url)
    }

    fn sale_url(&self) -> String {
        format!("{}/transacoes/venda", self.config.base_url)
    }

    fn transaction_url(&self, id: i64) -> String {
        format!("{}/transacoes/{}", self.config.base_url, id)
    }

    fn balance_url(&self, user_id: i64) -> String {
        format!("{}/transacoes/usuario/{}/saldo", self.config.base_url, user_id)
    }
}

#[async_trait]
impl LedgerServicePort for HttpLedgerService {
    async fn get_rate(&self) -> BackendResult {
        send_json("get_rate", self.client.get(self.rate_url())).await
    }

    async fn register_purchase(&self, order: &PurchaseOrder) -> BackendResult {
        let request = self.client.post(self.purchase_url()).query(&[
            ("user_id", order.user_id.as_str()),
            ("valor_brl", order.valor_brl.as_str()),
        ]);
        send_json("register_purchase", request).await
    }

    async fn register_sale(&self, order: &SaleOrder) -> BackendResult {
        let request = self.client.post(self.sale_url()).query(&[
            ("user_id", order.user_id.as_str()),
            ("quantidade_usd", order.quantidade_usd.as_str()),
        ]);
        send_json("register_sale", request).await
    }

    async fn get_transaction(&self, id: i64) -> BackendResult {
        send_json("get_transaction", self.client.get(self.transaction_url(id))).await
    }

    async fn get_balance(&self, user_id: i64) -> BackendResult {
        send_json("get_balance", self.client.get(self.balance_url(user_id))).await
    }
}
