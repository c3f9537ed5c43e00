use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagBankError {
    #[error("{0}")]
    Configuration(String),
    #[error("Remote error: {0}")]
    Remote(String),
    #[error("Error generating public key: {0}")]
    Provisioning(Box<PagBankError>),
    #[error("Error saving public key: {0}")]
    Persistence(Box<PagBankError>),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("Order state error: {0}")]
    OrderState(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDb(#[from] rocksdb::Error),
}

impl From<reqwest::Error> for PagBankError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Remote(format!("request timed out: {}", err))
        } else if err.is_decode() {
            Self::Remote(format!("invalid response body: {}", err))
        } else {
            Self::Remote(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, PagBankError>;
