use crate::domain::payment::CARD_METHOD_CODE;
use crate::domain::quote::Quote;
use tracing::debug;

/// Drops transient card metadata after a failed order submission so a retry
/// starts from a clean payment. Returns whether anything was cleared.
pub fn clear_card_payment_data(quote: &mut Quote) -> bool {
    let Some(payment) = quote.payment_mut() else {
        return false;
    };

    if payment.method() != CARD_METHOD_CODE {
        return false;
    }

    payment.unset_additional_information();
    debug!("Cleared card additional information after quote submit failure");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{PIX_METHOD_CODE, PaymentAttempt};

    fn quote_with(method: &str) -> Quote {
        let mut payment = PaymentAttempt::new(method);
        payment.set_additional_information("cc_brand", "visa");
        payment.set_additional_information("cc_last_4", "1111");
        payment.additional_data = Some(r#"{"status_pagbank":"DECLINED"}"#.to_string());
        Quote::with_payment(payment)
    }

    #[test]
    fn test_clears_card_payment() {
        let mut quote = quote_with(CARD_METHOD_CODE);
        assert!(clear_card_payment_data(&mut quote));

        let payment = quote.payment.unwrap();
        assert!(payment.additional_information.is_empty());
        assert_eq!(payment.method(), CARD_METHOD_CODE);
    }

    #[test]
    fn test_other_methods_untouched() {
        let mut quote = quote_with(PIX_METHOD_CODE);
        assert!(!clear_card_payment_data(&mut quote));
        assert_eq!(quote.payment.unwrap().additional_information.len(), 2);
    }

    #[test]
    fn test_quote_without_payment() {
        let mut quote = Quote::default();
        assert!(!clear_card_payment_data(&mut quote));
        assert!(quote.payment.is_none());
    }
}
