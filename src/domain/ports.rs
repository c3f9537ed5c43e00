use super::credential::Credential;
use super::order::SalesOrder;
use super::public_key::{PublicKey, PublicKeyRequest};
use crate::error::Result;
use async_trait::async_trait;

/// Path-keyed string configuration, persisted by the host platform.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get(&self, path: &str) -> Result<Option<String>>;
    async fn set(&self, path: &str, value: &str) -> Result<()>;
}

/// The PagBank Connect endpoint that exchanges a Connect Key for a public key.
#[async_trait]
pub trait PublicKeyClient: Send + Sync {
    async fn provision_public_key(
        &self,
        endpoint: &str,
        credential: &Credential,
        body: &PublicKeyRequest,
    ) -> Result<PublicKey>;
}

/// Applies a PagBank charge status to an order paid by card.
pub trait NotificationHandler: Send + Sync {
    fn handle_notification(&self, order: &mut dyn SalesOrder, status: &str) -> Result<()>;
}

/// Reports whether another platform module is installed and active.
pub trait ModuleRegistry: Send + Sync {
    fn is_module_active(&self, module: &str) -> bool;
}

pub type ConfigStoreBox = Box<dyn ConfigStore>;
pub type PublicKeyClientBox = Box<dyn PublicKeyClient>;
pub type NotificationHandlerBox = Box<dyn NotificationHandler>;
pub type ModuleRegistryBox = Box<dyn ModuleRegistry>;
