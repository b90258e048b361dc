use std::{collections::BTreeMap, fs};

use assert_cmd::Command;
use bank_ledger::csv::AccountSummary;
use rust_decimal::Decimal;

const SESSION: &str = "4\nAna\n111\nStreet 1\n\
                       4\nBia\n22223333\nStreet 2\n\
                       5\n111\n\n\
                       5\n22223333\n\n\
                       1\n1111\n100\n\
                       2\n1111\n30\n\
                       2\n1111\n1000\n\
                       1\n33332\n900\n\
                       2\n33332\n801\n\
                       0\n";

fn executable() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// summary is printed after the menu output, starting with csv header
fn read_summary(stdout: &str) -> anyhow::Result<BTreeMap<String, AccountSummary>> {
    let start = stdout
        .find("number,agency")
        .ok_or_else(|| anyhow::Error::msg("missing summary header"))?;

    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    let mut rdr = b.from_reader(stdout[start..].as_bytes());

    let mut map = BTreeMap::new();
    for acc_summ in rdr.deserialize() {
        let acc_summ: AccountSummary = acc_summ?;

        assert!(map.insert(acc_summ.number.clone(), acc_summ).is_none());
    }

    Ok(map)
}

#[test]
fn system_test() {
    let out = executable()
        .arg("--summary")
        .env_remove("BANK_AUDIT_LOG")
        .write_stdin(SESSION)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Account 1111 created!"));
    assert!(out.contains("Account 33332 created!"));
    assert!(out.contains("Goodbye!"));

    let summary = read_summary(&out).unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary["1111"].balance(), Decimal::new(70, 0));
    assert_eq!(summary["1111"].owner, "111");
    assert_eq!(summary["33332"].balance(), Decimal::new(900, 0));
    assert_eq!(summary["33332"].agency, "0001");
}

#[test]
fn audit_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.csv");

    executable()
        .arg("--audit-log")
        .arg(&log)
        .write_stdin(SESSION)
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    let operations: Vec<_> = content
        .lines()
        .map(|line| line.split(',').nth(1).unwrap().to_owned())
        .collect();
    assert_eq!(
        operations,
        vec![
            "new_customer",
            "new_customer",
            "new_account",
            "new_account",
            "deposit",
            "withdrawal",
            "withdrawal",
            "deposit",
            "withdrawal",
        ]
    );
    assert!(content
        .lines()
        .nth(6)
        .unwrap()
        .ends_with("withdrawal amount above the limit of 800"));
}

#[test]
fn unknown_argument_fails() {
    executable().arg("input.csv").assert().failure();
}
