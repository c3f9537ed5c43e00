use crate::domain::payment::{InfoField, PaymentAttempt, resolve_field};
use tracing::debug;

/// Label/value pairs for the payment info block, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificInformation {
    entries: Vec<(String, String)>,
}

impl SpecificInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a label, replacing any previous value in place.
    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn merge(&mut self, other: SpecificInformation) {
        for (label, value) in other.entries {
            self.set(label, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

/// Builds the payment details shown to customers and administrators.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentInfoPresenter;

impl PaymentInfoPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Secure mode withholds the operational identifiers of the charge.
    pub fn specific_information(
        &self,
        payment: &PaymentAttempt,
        secure_mode: bool,
    ) -> SpecificInformation {
        let blob = match payment.decode_additional_data() {
            Ok(blob) => blob,
            Err(e) => {
                debug!("Ignoring undecodable additional data: {}", e);
                None
            }
        };

        let operational: &[InfoField] = if secure_mode {
            &[]
        } else {
            &InfoField::OPERATIONAL
        };

        let mut info = SpecificInformation::new();
        for field in InfoField::PUBLIC.iter().chain(operational) {
            if let Some(value) =
                resolve_field(&payment.additional_information, blob.as_ref(), field.key())
            {
                info.set(field.label(), value);
            }
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::CARD_METHOD_CODE;
    use serde_json::json;

    fn full_payment() -> PaymentAttempt {
        let mut payment = PaymentAttempt::new(CARD_METHOD_CODE);
        for field in InfoField::PUBLIC.iter().chain(InfoField::OPERATIONAL.iter()) {
            payment.set_additional_information(field.key(), format!("{}-value", field.key()));
        }
        payment
    }

    #[test]
    fn test_secure_mode_withholds_operational_fields() {
        let info = PaymentInfoPresenter::new().specific_information(&full_payment(), true);

        assert_eq!(info.len(), 6);
        assert_eq!(info.get("Card Brand"), Some("cc_brand-value"));
        assert_eq!(info.get("Card Last 4 Digits"), Some("cc_last_4-value"));
        assert_eq!(info.get("Expiration Month"), Some("cc_exp_month-value"));
        assert_eq!(info.get("Expiration Year"), Some("cc_exp_year-value"));
        assert_eq!(info.get("Card Holder"), Some("cc_owner-value"));
        assert_eq!(info.get("Installments"), Some("cc_installments-value"));
        for field in InfoField::OPERATIONAL {
            assert!(info.get(field.label()).is_none(), "{:?} leaked", field);
        }
    }

    #[test]
    fn test_admin_view_includes_everything_in_order() {
        let info = PaymentInfoPresenter::new().specific_information(&full_payment(), false);

        let labels: Vec<&str> = info.iter().map(|(l, _)| l).collect();
        let expected: Vec<&str> = InfoField::PUBLIC
            .iter()
            .chain(InfoField::OPERATIONAL.iter())
            .map(|f| f.label())
            .collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_falls_back_to_blob_and_omits_missing() {
        let mut payment = PaymentAttempt::new(CARD_METHOD_CODE);
        payment.set_additional_information("cc_brand", "visa");
        let blob = json!({ "cc_last_4": "1111", "cc_installments": 3, "nsu": "778" });
        payment
            .set_additional_data(blob.as_object().unwrap())
            .unwrap();

        let info = PaymentInfoPresenter::new().specific_information(&payment, false);

        assert_eq!(info.get("Card Brand"), Some("visa"));
        assert_eq!(info.get("Card Last 4 Digits"), Some("1111"));
        assert_eq!(info.get("Installments"), Some("3"));
        assert_eq!(info.get("NSU"), Some("778"));
        assert!(info.get("Card Holder").is_none());
        assert!(info.get("Charge ID").is_none());
        assert_eq!(info.len(), 4);
    }

    #[test]
    fn test_malformed_blob_is_treated_as_empty() {
        let mut payment = PaymentAttempt::new(CARD_METHOD_CODE);
        payment.additional_data = Some("a:1:{".to_string());
        payment.set_additional_information("cc_owner", "MARIA SILVA");

        let info = PaymentInfoPresenter::new().specific_information(&payment, true);
        assert_eq!(info.len(), 1);
        assert_eq!(info.get("Card Holder"), Some("MARIA SILVA"));
    }

    #[test]
    fn test_merge_replaces_existing_labels() {
        let mut transport = SpecificInformation::new();
        transport.set("Card Brand", "old");
        transport.set("Other", "kept");

        let mut fresh = SpecificInformation::new();
        fresh.set("Card Brand", "visa");
        transport.merge(fresh);

        assert_eq!(transport.get("Card Brand"), Some("visa"));
        assert_eq!(transport.get("Other"), Some("kept"));
        assert_eq!(transport.len(), 2);
    }
}
