use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const CARD_METHOD_CODE: &str = "pagbank_cc";
pub const PIX_METHOD_CODE: &str = "pagbank_pix";
pub const BILLET_METHOD_CODE: &str = "pagbank_boleto";

/// Blob key carrying the charge status reported by PagBank.
pub const STATUS_PAGBANK: &str = "status_pagbank";

/// The closed set of payment method variants that need distinct handling
/// after an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Card,
    Pix,
    Billet,
    Other,
}

impl MethodKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            CARD_METHOD_CODE => Self::Card,
            PIX_METHOD_CODE => Self::Pix,
            BILLET_METHOD_CODE => Self::Billet,
            _ => Self::Other,
        }
    }
}

/// Payment fields shown on the payment info block, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    CcBrand,
    CcLast4,
    CcExpMonth,
    CcExpYear,
    CcOwner,
    CcInstallments,
    OrderId,
    ChargeId,
    ChargeLink,
    AuthorizationCode,
    Nsu,
    SessionId,
    ThreeDsId,
}

impl InfoField {
    /// Always displayed.
    pub const PUBLIC: [InfoField; 6] = [
        InfoField::CcBrand,
        InfoField::CcLast4,
        InfoField::CcExpMonth,
        InfoField::CcExpYear,
        InfoField::CcOwner,
        InfoField::CcInstallments,
    ];

    /// Withheld in secure mode.
    pub const OPERATIONAL: [InfoField; 7] = [
        InfoField::OrderId,
        InfoField::ChargeId,
        InfoField::ChargeLink,
        InfoField::AuthorizationCode,
        InfoField::Nsu,
        InfoField::SessionId,
        InfoField::ThreeDsId,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CcBrand => "cc_brand",
            Self::CcLast4 => "cc_last_4",
            Self::CcExpMonth => "cc_exp_month",
            Self::CcExpYear => "cc_exp_year",
            Self::CcOwner => "cc_owner",
            Self::CcInstallments => "cc_installments",
            Self::OrderId => "pagbank_order_id",
            Self::ChargeId => "charge_id",
            Self::ChargeLink => "charge_link",
            Self::AuthorizationCode => "authorization_code",
            Self::Nsu => "nsu",
            Self::SessionId => "pagbank_session",
            Self::ThreeDsId => "cc_3ds_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CcBrand => "Card Brand",
            Self::CcLast4 => "Card Last 4 Digits",
            Self::CcExpMonth => "Expiration Month",
            Self::CcExpYear => "Expiration Year",
            Self::CcOwner => "Card Holder",
            Self::CcInstallments => "Installments",
            Self::OrderId => "PagBank Order ID",
            Self::ChargeId => "Charge ID",
            Self::ChargeLink => "Charge Link",
            Self::AuthorizationCode => "Authorization Code",
            Self::Nsu => "NSU",
            Self::SessionId => "PagBank Session ID",
            Self::ThreeDsId => "3DS ID",
        }
    }
}

/// One order's payment: the selected method plus the metadata written by the
/// method during checkout.
///
/// The same logical field may live in `additional_information` (structured) or
/// in `additional_data`, a serialized JSON object kept for older records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentAttempt {
    pub method: String,
    #[serde(default)]
    pub additional_information: BTreeMap<String, Value>,
    #[serde(default)]
    pub additional_data: Option<String>,
}

impl PaymentAttempt {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn method_kind(&self) -> MethodKind {
        MethodKind::from_code(&self.method)
    }

    pub fn set_additional_information(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.additional_information.insert(key.into(), value.into());
    }

    pub fn additional_information(&self, key: &str) -> Option<&Value> {
        self.additional_information.get(key)
    }

    pub fn unset_additional_information(&mut self) {
        self.additional_information.clear();
    }

    pub fn set_additional_data(&mut self, data: &Map<String, Value>) -> crate::error::Result<()> {
        self.additional_data = Some(serde_json::to_string(data)?);
        Ok(())
    }

    /// Decodes the serialized blob. `Ok(None)` when no blob is stored.
    pub fn decode_additional_data(&self) -> crate::error::Result<Option<Map<String, Value>>> {
        match self.additional_data.as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }
}

/// Ordered fallback across the two storage locations of a payment field.
///
/// A structured value counts only when it is truthy (not null, `""`, `"0"`,
/// zero, `false` or an empty container); a blob value counts whenever it is set.
pub fn resolve_field(
    structured: &BTreeMap<String, Value>,
    blob: Option<&Map<String, Value>>,
    key: &str,
) -> Option<String> {
    if let Some(value) = structured.get(key)
        && !is_blank(value)
    {
        return Some(render(value));
    }

    blob.and_then(|data| data.get(key))
        .filter(|value| !value.is_null())
        .map(render)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
