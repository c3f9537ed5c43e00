use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file
}

pub fn card_payment() -> Value {
    serde_json::json!({
        "method": "pagbank_cc",
        "additional_information": {
            "cc_brand": "visa",
            "cc_last_4": "1111",
            "cc_owner": "MARIA SILVA",
            "charge_id": "CHAR_0001",
            "authorization_code": "032"
        },
        "additional_data": "{\"cc_installments\":3,\"nsu\":\"778\",\"status_pagbank\":\"PAID\"}"
    })
}
