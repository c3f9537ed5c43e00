mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

fn reconcile(placement: serde_json::Value) -> assert_cmd::assert::Assert {
    let file = common::json_file(&placement);
    let mut cmd = Command::new(cargo_bin!("pagbank-connect"));
    cmd.arg("reconcile").arg(file.path());
    cmd.assert()
}

#[test]
fn test_card_paid_moves_to_processing() {
    reconcile(json!({
        "payment": common::card_payment(),
        "order": { "increment_id": "100000001", "state": "new" }
    }))
    .success()
    .stdout(predicate::str::diff("processing\n"));
}

#[test]
fn test_pix_and_boleto_wait_for_payment() {
    for method in ["pagbank_pix", "pagbank_boleto"] {
        reconcile(json!({
            "payment": { "method": method },
            "order": { "increment_id": "100000002" }
        }))
        .success()
        .stdout(predicate::str::diff("pending_payment\n"));
    }
}

#[test]
fn test_failed_state_change_does_not_fail_placement() {
    // Canceled orders refuse new states; the failure is only logged.
    reconcile(json!({
        "payment": { "method": "pagbank_pix" },
        "order": { "increment_id": "100000003", "state": "canceled" }
    }))
    .success()
    .stdout(predicate::str::diff("canceled\n"))
    .stderr(predicate::str::contains("Error handling PagBank return"));
}

#[test]
fn test_unknown_card_status_is_logged() {
    reconcile(json!({
        "payment": {
            "method": "pagbank_cc",
            "additional_data": "{\"status_pagbank\":\"SOMETHING_NEW\"}"
        },
        "order": { "increment_id": "100000004" }
    }))
    .success()
    .stdout(predicate::str::diff("new\n"))
    .stderr(predicate::str::contains("SOMETHING_NEW"));
}

#[test]
fn test_other_methods_are_left_alone() {
    reconcile(json!({
        "payment": { "method": "checkmo" },
        "order": { "increment_id": "100000005", "state": "processing" }
    }))
    .success()
    .stdout(predicate::str::diff("processing\n"));
}
