use crate::domain::ports::ConfigStore;
use crate::error::{PagBankError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding path-keyed configuration values.
pub const CF_CORE_CONFIG: &str = "core_config";

/// A persistent configuration store backed by RocksDB.
///
/// Keys are configuration paths, values are UTF-8 strings.
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbConfigStore {
    db: Arc<DB>,
}

impl RocksDbConfigStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the `core_config` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_config = ColumnFamilyDescriptor::new(CF_CORE_CONFIG, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_config])?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl ConfigStore for RocksDbConfigStore {
    async fn get(&self, path: &str) -> Result<Option<String>> {
        let cf = self
            .db
            .cf_handle(CF_CORE_CONFIG)
            .ok_or_else(|| PagBankError::Storage("Config column family not found".to_string()))?;

        match self.db.get_cf(&cf, path.as_bytes())? {
            Some(bytes) => {
                let value = String::from_utf8(bytes).map_err(|e| {
                    PagBankError::Storage(format!("Invalid UTF-8 at {}: {}", path, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, path: &str, value: &str) -> Result<()> {
        let cf = self
            .db
            .cf_handle(CF_CORE_CONFIG)
            .ok_or_else(|| PagBankError::Storage("Config column family not found".to_string()))?;

        self.db.put_cf(&cf, path.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}
