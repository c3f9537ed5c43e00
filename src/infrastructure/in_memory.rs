use crate::domain::ports::{ConfigStore, ModuleRegistry};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory configuration store.
///
/// Uses `Arc<RwLock<HashMap<String, String>>>`; clones share the same values.
/// Ideal for testing or for a single run of the CLI.
#[derive(Default, Clone)]
pub struct InMemoryConfigStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryConfigStore {
    /// Creates a new, empty in-memory configuration store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get(&self, path: &str) -> Result<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(path).cloned())
    }

    async fn set(&self, path: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.insert(path.to_string(), value.to_string());
        Ok(())
    }
}

/// A fixed list of active modules.
#[derive(Debug, Default, Clone)]
pub struct StaticModuleRegistry {
    active: HashSet<String>,
}

impl StaticModuleRegistry {
    pub fn new<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: active.into_iter().map(Into::into).collect(),
        }
    }
}

impl ModuleRegistry for StaticModuleRegistry {
    fn is_module_active(&self, module: &str) -> bool {
        self.active.contains(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_config_store() {
        let store = InMemoryConfigStore::new();
        store.set("payment/pagbank/public_key", "abc").await.unwrap();

        let retrieved = store.get("payment/pagbank/public_key").await.unwrap();
        assert_eq!(retrieved.as_deref(), Some("abc"));

        assert!(store.get("payment/pagbank/other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_config_store_overwrites() {
        let store = InMemoryConfigStore::new();
        let shared = store.clone();
        store.set("path", "first").await.unwrap();
        shared.set("path", "second").await.unwrap();

        assert_eq!(store.get("path").await.unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_static_module_registry() {
        let registry = StaticModuleRegistry::new(["MOIP_Transparente"]);
        assert!(registry.is_module_active("MOIP_Transparente"));
        assert!(!registry.is_module_active("Other_Module"));
    }
}
