use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn xpdash() -> Command {
    let mut cmd = Command::cargo_bin("xpdash").unwrap();
    cmd.env_remove("XPDASH_PASSWORD").env_remove("XPDASH_PATH");
    cmd
}

#[test]
fn help_lists_dashboard_commands() {
    xpdash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("overview"))
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("progress"));
}

#[test]
fn bare_invocation_prints_guidance() {
    let temp = TempDir::new().unwrap();
    xpdash()
        .args(["--data-dir", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("config set --username"));
}

#[test]
fn config_set_then_show_round_trips() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().to_str().unwrap();

    xpdash()
        .args(["--data-dir", data_dir, "config", "set", "--username", "jdoe"])
        .assert()
        .success();

    xpdash()
        .args(["--data-dir", data_dir, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username: jdoe"));
}

#[test]
fn dashboard_command_without_credentials_fails() {
    let temp = TempDir::new().unwrap();
    xpdash()
        .args(["--data-dir", temp.path().to_str().unwrap(), "audit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no username"));
}

#[test]
fn unknown_format_is_rejected_at_parse_time() {
    let temp = TempDir::new().unwrap();
    xpdash()
        .args(["--data-dir", temp.path().to_str().unwrap()])
        .args(["--format", "yaml", "audit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"))
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn config_set_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    xpdash()
        .args(["--data-dir", temp.path().to_str().unwrap(), "config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to set"));
}
