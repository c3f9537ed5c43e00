//! Adapters for the domain ports.

pub mod connect_client;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
