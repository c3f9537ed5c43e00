use crate::config::ConnectSettings;
use crate::domain::credential::Credential;
use crate::domain::ports::PublicKeyClient;
use crate::domain::public_key::{PublicKey, PublicKeyRequest, PublicKeyResponse};
use crate::error::{PagBankError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

/// HTTP client for the PagBank Connect API.
///
/// One request per call, bounded by the configured timeout, never retried.
#[derive(Clone)]
pub struct ConnectClient {
    client: reqwest::Client,
}

impl ConnectClient {
    pub fn new(settings: &ConnectSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| PagBankError::Remote(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PublicKeyClient for ConnectClient {
    async fn provision_public_key(
        &self,
        endpoint: &str,
        credential: &Credential,
        body: &PublicKeyRequest,
    ) -> Result<PublicKey> {
        debug!(endpoint, "Requesting PagBank public key");

        let response = self
            .client
            .post(endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", credential.as_str()))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PagBankError::Remote(format!("HTTP {}: {}", status, text)));
        }

        let parsed: PublicKeyResponse = response.json().await?;
        match parsed.public_key {
            Some(key) if !key.is_empty() => Ok(PublicKey::new(key)),
            _ => Err(PagBankError::Remote(
                "response is missing the public_key field".to_string(),
            )),
        }
    }
}
