use serde::{Deserialize, Serialize};

/// Public key returned by the Connect API, used by the storefront to encrypt card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    Card,
}

/// Body of the public key request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyRequest {
    pub r#type: KeyType,
}

impl PublicKeyRequest {
    pub fn card() -> Self {
        Self {
            r#type: KeyType::Card,
        }
    }
}

/// Response of the public key request. The field is optional so a missing key
/// can be reported as a remote error instead of a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKeyResponse {
    #[serde(default)]
    pub public_key: Option<String>,
}
