//! HTTP Relayer Adapter
//!
//! Implements `RelayerApi` against a relayer's JSON REST endpoints.

use crate::domain::{CoordinatorError, OrderId, PublishedSecret, ReadyFill};
use crate::ports::outbound::RelayerApi;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use xs_01_commitment::SecureSecret;

const SUBMIT_SECRET_PATH: &str = "relayer/v1.0/submit/secret";
const READY_FILLS_PATH: &str = "orders/v1.0/order/ready-to-accept-secret-fills";
const SECRETS_PATH: &str = "orders/v1.0/order/secrets";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitSecretRequest {
    order_hash: String,
    idx: usize,
    secret: String,
}

#[derive(Deserialize)]
struct ReadyFillsResponse {
    fills: Vec<ReadyFill>,
}

#[derive(Deserialize)]
struct SecretsResponse {
    secrets: Vec<PublishedSecret>,
}

/// Relayer reached over HTTP.
pub struct HttpRelayerClient {
    client: Client,
    base_url: String,
}

impl HttpRelayerClient {
    /// Create a client for the relayer at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CoordinatorError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| CoordinatorError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Relayer base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn map_err(&self, e: reqwest::Error) -> CoordinatorError {
        if e.is_connect() {
            CoordinatorError::Relayer(format!("Cannot connect to {}", self.base_url))
        } else if e.is_timeout() {
            CoordinatorError::Relayer(format!("Timed out talking to {}", self.base_url))
        } else {
            CoordinatorError::Relayer(e.to_string())
        }
    }

    async fn get_json<R: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<R, CoordinatorError> {
        debug!(%url, "Relayer GET");
        self.client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.map_err(e))?
            .json()
            .await
            .map_err(|e| CoordinatorError::Relayer(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl RelayerApi for HttpRelayerClient {
    async fn submit_secret(
        &self,
        order_id: OrderId,
        index: usize,
        secret: &SecureSecret,
    ) -> Result<(), CoordinatorError> {
        let request = SubmitSecretRequest {
            order_hash: order_id.to_string(),
            idx: index,
            secret: secret.reveal_hex(),
        };
        self.client
            .post(self.url(SUBMIT_SECRET_PATH))
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.map_err(e))?;
        info!(%order_id, index, "Secret submitted to relayer");
        Ok(())
    }

    async fn ready_to_accept_secret_fills(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<ReadyFill>, CoordinatorError> {
        let url = format!("{}/{}", self.url(READY_FILLS_PATH), order_id);
        let response: ReadyFillsResponse = self.get_json(url).await?;
        Ok(response.fills)
    }

    async fn published_secrets(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<PublishedSecret>, CoordinatorError> {
        let url = format!("{}/{}", self.url(SECRETS_PATH), order_id);
        let response: SecretsResponse = self.get_json(url).await?;
        Ok(response.secrets)
    }
}
