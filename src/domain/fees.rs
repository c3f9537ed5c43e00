//! Request payloads carrying fee and interest parameters, built by API callers
//! for installment requests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Interest charged to the buyer for an installment plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    #[serde(skip_serializing_if = "Option::is_none")]
    installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<Decimal>,
}

impl Interest {
    pub fn installments(&self) -> Option<u32> {
        self.installments
    }

    pub fn set_installments(&mut self, installments: u32) -> &mut Self {
        self.installments = Some(installments);
        self
    }

    pub fn total(&self) -> Option<Decimal> {
        self.total
    }

    pub fn set_total(&mut self, total: Decimal) -> &mut Self {
        self.total = Some(total);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(skip_serializing_if = "Option::is_none")]
    interest: Option<Interest>,
}

impl Buyer {
    pub fn interest(&self) -> Option<&Interest> {
        self.interest.as_ref()
    }

    pub fn set_interest(&mut self, interest: Interest) -> &mut Self {
        self.interest = Some(interest);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    #[serde(skip_serializing_if = "Option::is_none")]
    buyer: Option<Buyer>,
}

impl Fees {
    pub fn buyer(&self) -> Option<&Buyer> {
        self.buyer.as_ref()
    }

    pub fn set_buyer(&mut self, buyer: Buyer) -> &mut Self {
        self.buyer = Some(buyer);
        self
    }
}
