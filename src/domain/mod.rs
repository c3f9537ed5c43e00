//! Domain types and the ports through which the integration talks to the host
//! platform and to PagBank.

pub mod config_paths;
pub mod credential;
pub mod fees;
pub mod layout;
pub mod order;
pub mod payment;
pub mod ports;
pub mod public_key;
pub mod quote;
