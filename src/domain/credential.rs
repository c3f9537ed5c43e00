use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static LEGACY_PUBLIC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PUB(?-u:\w){0,39}$").expect("legacy credential pattern is valid"));

/// Returns `true` when the token has the shape of a legacy PagBank Public Key.
///
/// Such tokens cannot be exchanged for a public key and must be replaced by a
/// Connect Key. Word characters are ASCII only (`[A-Za-z0-9_]`).
pub fn is_legacy_credential(token: &str) -> bool {
    LEGACY_PUBLIC_KEY.is_match(token)
}

/// An administrator-supplied Connect Key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for unset or blank values.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_legacy(&self) -> bool {
        is_legacy_credential(&self.0)
    }
}

// Never print the full token.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "Credential({}***)", prefix)
    }
}
