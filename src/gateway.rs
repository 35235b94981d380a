//! Client for the game's third-party character gateway.
//!
//! The browser builds a base64 payload `{character_id, nickname}` and an
//! HMAC-SHA256 signature over it; this server only relays both to the
//! gateway, first exchanging them for a short-lived lite token and then
//! trading that token for the character info blob. Responses pass through
//! untouched, including upstream error statuses and bodies.

use std::time::Duration;

use serde_json::Value;

use crate::error::{gateway::GatewayError, Error};

/// Upstream address and client id observed in the game's own web client.
pub const DEFAULT_GATEWAY_URL: &str = "https://5c7021242c10k1d2.tap4hub.com:10443";
pub const DEFAULT_CLIENT_ID: &str = "k1d2:oap.1.0.0";

// A hung gateway call fails the whole fetch flow; nothing is applied
// partially.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>, client_id: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(GATEWAY_TIMEOUT)
            .build()
            .map_err(GatewayError::Transport)?;

        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
        })
    }

    /// Exchanges a signed character payload for a short-lived lite token.
    pub async fn fetch_lite_token(
        &self,
        encoded_payload: &str,
        sign: &str,
    ) -> Result<Value, Error> {
        let url = format!("{}/tgs/gateway2/character/litetoken", self.base_url);

        // The gateway only accepts the litetoken exchange as form data.
        let form = reqwest::multipart::Form::new()
            .text("encoded_payload", encoded_payload.to_string())
            .text("sign", sign.to_string());

        let response = self
            .http
            .post(&url)
            .query(&[("client_id", self.client_id.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        Self::passthrough(response).await
    }

    /// Fetches the character info blob for a previously issued lite token.
    pub async fn fetch_character_info(&self, lite_token: &str) -> Result<Value, Error> {
        let url = format!("{}/tgs/gateway2/oap/character/info", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lite_token", lite_token),
                ("client_id", self.client_id.as_str()),
            ])
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        Self::passthrough(response).await
    }

    async fn passthrough(response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(response.json().await.map_err(GatewayError::Transport)?)
    }
}
