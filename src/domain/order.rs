use crate::error::{PagBankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    #[default]
    New,
    PendingPayment,
    Processing,
    PaymentReview,
    Holded,
    Complete,
    Closed,
    Canceled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::PendingPayment => "pending_payment",
            Self::Processing => "processing",
            Self::PaymentReview => "payment_review",
            Self::Holded => "holded",
            Self::Complete => "complete",
            Self::Closed => "closed",
            Self::Canceled => "canceled",
        }
    }

    /// Final states accept no further transitions.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Complete | Self::Closed | Self::Canceled)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The order aggregate as seen by this integration.
pub trait SalesOrder {
    fn increment_id(&self) -> &str;
    fn state(&self) -> OrderState;
    fn set_state(&mut self, state: OrderState) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub increment_id: String,
    #[serde(default)]
    pub state: OrderState,
}

impl Order {
    pub fn new(increment_id: impl Into<String>) -> Self {
        Self {
            increment_id: increment_id.into(),
            state: OrderState::New,
        }
    }
}

impl SalesOrder for Order {
    fn increment_id(&self) -> &str {
        &self.increment_id
    }

    fn state(&self) -> OrderState {
        self.state
    }

    fn set_state(&mut self, state: OrderState) -> Result<()> {
        if self.state.is_final() && self.state != state {
            return Err(PagBankError::OrderState(format!(
                "order {} is {} and cannot move to {}",
                self.increment_id, self.state, state
            )));
        }
        self.state = state;
        Ok(())
    }
}
