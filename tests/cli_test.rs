mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_info_admin_view() -> Result<(), Box<dyn std::error::Error>> {
    let file = common::json_file(&common::card_payment());

    let mut cmd = Command::new(cargo_bin!("pagbank-connect"));
    cmd.arg("info").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("label,value"))
        .stdout(predicate::str::contains("Card Brand,visa"))
        // Blob fallback
        .stdout(predicate::str::contains("Installments,3"))
        .stdout(predicate::str::contains("NSU,778"))
        .stdout(predicate::str::contains("Charge ID,CHAR_0001"));

    Ok(())
}

#[test]
fn test_info_secure_mode() {
    let file = common::json_file(&common::card_payment());

    let mut cmd = Command::new(cargo_bin!("pagbank-connect"));
    cmd.arg("info").arg(file.path()).arg("--secure");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Card Holder,MARIA SILVA"))
        .stdout(predicate::str::contains("Card Last 4 Digits,1111"))
        .stdout(predicate::str::contains("Charge ID").not())
        .stdout(predicate::str::contains("Authorization Code").not())
        .stdout(predicate::str::contains("NSU").not());
}

#[test]
fn test_info_rejects_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"not json").unwrap();

    let mut cmd = Command::new(cargo_bin!("pagbank-connect"));
    cmd.arg("info").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
