use crate::domain::order::Order;
use crate::domain::payment::PaymentAttempt;
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// A placed order together with its payment, as read by the `reconcile` command.
#[derive(Debug, Clone, Deserialize)]
pub struct Placement {
    pub payment: PaymentAttempt,
    pub order: Order,
}

pub fn read_payment<R: Read>(source: R) -> Result<PaymentAttempt> {
    Ok(serde_json::from_reader(source)?)
}

pub fn read_placement<R: Read>(source: R) -> Result<Placement> {
    Ok(serde_json::from_reader(source)?)
}
