use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ws.pbintegracoes.com/pspro/v7";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for talking to the PagBank Connect API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectSettings {
    pub public_key_endpoint: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ConnectSettings {
    fn default() -> Self {
        Self {
            public_key_endpoint: format!("{}/connect/public-key", DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConnectSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.public_key_endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConnectSettings::default();
        assert_eq!(
            settings.public_key_endpoint,
            "https://ws.pbintegracoes.com/pspro/v7/connect/public-key"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let settings: ConnectSettings = serde_json::from_str(r#"{"timeout": 3}"#).unwrap();
        assert_eq!(settings.timeout, 3);
        assert_eq!(
            settings.public_key_endpoint,
            ConnectSettings::default().public_key_endpoint
        );
    }
}
