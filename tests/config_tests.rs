//! Integration tests for the config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::dayfold_cmd;

fn init_vault() -> TempDir {
    let temp = TempDir::new().unwrap();
    dayfold_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_config_get_format() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains("YYYYMMDD"));
}

#[test]
fn test_config_set_format() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("format")
        .arg("YYYY-MM-DD")
        .assert()
        .success();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("format")
        .assert()
        .success()
        .stdout(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_config_set_format_rejects_variable_width() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("format")
        .arg("MMMM")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("fixed-width"));
}

#[test]
fn test_config_set_root_trims_trailing_slash() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("root")
        .arg("dailies/")
        .assert()
        .success();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("root")
        .assert()
        .success()
        .stdout(predicate::str::diff("dailies\n"));
}

#[test]
fn test_config_set_template_requires_md() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("template")
        .arg("daily.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end with .md"));
}

#[test]
fn test_config_list() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("format = YYYYMMDD"))
        .stdout(predicate::str::contains("description = true"))
        .stdout(predicate::str::contains("use_template = false"))
        .stdout(predicate::str::contains("date_format ="));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = init_vault();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"))
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn test_config_outside_vault_fails() {
    let temp = TempDir::new().unwrap();

    dayfold_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a dayfold vault"));
}
