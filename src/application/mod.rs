//! Application layer: the handlers run in response to platform events.
//!
//! `PagBankObserver` is the entry point. Configuration saves go through
//! `KeyProvisioner` and may fail; payment placement, display, quote failure and
//! layout generation are handled best-effort.

pub mod cleanup;
pub mod layout;
pub mod observer;
pub mod presenter;
pub mod provisioning;
pub mod reconciler;
