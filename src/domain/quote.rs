use super::payment::PaymentAttempt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub payment: Option<PaymentAttempt>,
}

impl Quote {
    pub fn with_payment(payment: PaymentAttempt) -> Self {
        Self {
            payment: Some(payment),
        }
    }

    pub fn payment_mut(&mut self) -> Option<&mut PaymentAttempt> {
        self.payment.as_mut()
    }
}
