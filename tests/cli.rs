use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-ledger").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", dir.path())
        .env_remove("EXPENSE_LEDGER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn seeded_session_reports_total() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .write_stdin("login\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Gasto: R$ 700,40"));
}

#[test]
fn add_then_list_shows_newest_first() {
    let dir = TempDir::new().unwrap();
    let output = ledger_cmd(&dir)
        .write_stdin("login\nadd Coffee 12.00 --method cash\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Gasto: R$ 712,40"))
        .stdout(predicate::str::contains("Outros · Dinheiro"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let history = &text[text.find("Histórico de Contas").unwrap()..];
    assert!(history.find("Coffee").unwrap() < history.find("Conta de Luz").unwrap());
}

#[test]
fn bad_amount_is_reported_and_session_continues() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .write_stdin("login\nadd Coffee twelve\ntotal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Could not parse amount 'twelve'"))
        .stdout(predicate::str::contains("Total Gasto: R$ 700,40"));
}

#[test]
fn empty_ledger_with_english_locale() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .args(["--no-seed", "--locale", "en-US"])
        .write_stdin("login\nlist\nchart\ntotal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."))
        .stdout(predicate::str::contains("Total Spent: $0.00"));
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .write_stdin("login\ndelete nonexistent-id\ntotal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error").not())
        .stdout(predicate::str::contains("Total Gasto: R$ 700,40"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .write_stdin("login\nadd Coffee 12\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("(Coffee)"));
}

#[test]
fn settings_file_is_honored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "locale": "en-US", "default_category": "Misc" }"#,
    )
    .unwrap();

    ledger_cmd(&dir)
        .write_stdin("login\nadd Coffee 12 --method debit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $712.40"))
        .stdout(predicate::str::contains("Misc · Debit"));
}

#[test]
fn config_write_creates_settings_file() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:                 pt-BR"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"default_category\": \"Outros\""));
}

#[test]
fn oversized_amount_is_rejected_without_crashing() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .write_stdin("login\nadd Big 92233720368547758\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("amount too large"))
        .stdout(predicate::str::contains("Total Gasto: R$ 700,40"));
}

#[test]
fn grouped_amount_follows_locale() {
    let dir = TempDir::new().unwrap();
    ledger_cmd(&dir)
        .args(["--no-seed", "--locale", "en-US"])
        .write_stdin("login\nadd TV 1,234\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $1,234.00"));
}

#[test]
fn explicit_config_file_is_used_without_config_dir() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("custom.json");
    std::fs::write(&settings, r#"{ "locale": "en-US" }"#).unwrap();

    ledger_cmd(&dir)
        .env_remove("EXPENSE_LEDGER_DIR")
        .arg("--config")
        .arg(&settings)
        .write_stdin("login\ntotal\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $700.40"));
}
