use crate::domain::config_paths;
use crate::domain::credential::Credential;
use crate::domain::ports::{ConfigStoreBox, PublicKeyClientBox};
use crate::domain::public_key::{PublicKey, PublicKeyRequest};
use crate::error::{PagBankError, Result};
use tracing::{debug, error, info, warn};

const CONNECT_AUTHORIZE_URL: &str = "https://pbintegracoes.com/connect/autorizar/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    /// No Connect Key is configured.
    Skipped,
    Provisioned(PublicKey),
}

/// Exchanges the configured Connect Key for a public key and stores it.
///
/// Runs when the administrator saves the payment configuration; any error
/// returned here must abort that save.
pub struct KeyProvisioner {
    config_store: ConfigStoreBox,
    client: PublicKeyClientBox,
    endpoint: String,
}

impl KeyProvisioner {
    pub fn new(config_store: ConfigStoreBox, client: PublicKeyClientBox, endpoint: String) -> Self {
        Self {
            config_store,
            client,
            endpoint,
        }
    }

    pub fn config_store(&self) -> &ConfigStoreBox {
        &self.config_store
    }

    pub async fn generate_public_key(&self) -> Result<ProvisioningOutcome> {
        let raw = self.config_store.get(config_paths::CONNECT_KEY).await?;
        let Some(credential) = raw.and_then(Credential::new) else {
            debug!("No Connect Key configured, skipping public key generation");
            return Ok(ProvisioningOutcome::Skipped);
        };

        if credential.is_legacy() {
            let msg = format!(
                "It looks like you entered a Public Key. To use the next generation of our integrations, obtain a Connect Key for free at {}",
                CONNECT_AUTHORIZE_URL
            );
            warn!("{}", msg);
            return Err(PagBankError::Configuration(msg));
        }

        let public_key = self
            .client
            .provision_public_key(&self.endpoint, &credential, &PublicKeyRequest::card())
            .await
            .map_err(|e| {
                error!("Error generating public key: {}", e);
                PagBankError::Provisioning(Box::new(e))
            })?;

        self.config_store
            .set(config_paths::PUBLIC_KEY, public_key.as_str())
            .await
            .map_err(|e| {
                error!("Error saving public key: {}", e);
                PagBankError::Persistence(Box::new(e))
            })?;

        info!(endpoint = %self.endpoint, "PagBank public key provisioned");
        Ok(ProvisioningOutcome::Provisioned(public_key))
    }
}
