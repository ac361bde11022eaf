//! Success paths of each subcommand

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_resolve_bare_and_dot_relative() -> Result<()> {
    let helper = CliTestHelper::new();

    for expression in ["conf/app.yaml", "./conf/app.yaml", "  conf/app.yaml  "] {
        helper
            .command()
            .args(["resolve", expression, "--base-dir", "/srv/project"])
            .assert()
            .success()
            .stdout("/srv/project/conf/app.yaml\n");
    }

    Ok(())
}

#[test]
fn test_resolve_absolute_ignores_base() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["resolve", "/etc/hosts", "--base-dir", "/srv/project"])
        .assert()
        .success()
        .stdout("/etc/hosts\n");

    Ok(())
}

#[test]
fn test_resolve_uses_config_base_dir() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("paths:\n  base_dir: /opt/data\n")?;

    helper
        .command()
        .args(["resolve", "input.csv"])
        .assert()
        .success()
        .stdout("/opt/data/input.csv\n");

    Ok(())
}

#[test]
fn test_prefix_match() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["prefix-match", "/data/app", "/data/app/logs"])
        .assert()
        .success()
        .stdout("true\n");

    helper
        .command()
        .args(["prefix-match", "/data/app/logs", "/data/app"])
        .assert()
        .success()
        .stdout("false\n");

    Ok(())
}

#[test]
fn test_cat_trims_and_lines_preserve() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("notes.txt", "  hello world  \n")?;
    helper.write_file("list.txt", "one\ntwo\n")?;

    helper
        .command()
        .args(["cat", "notes.txt"])
        .assert()
        .success()
        .stdout("hello world\n");

    helper
        .command()
        .args(["cat", "list.txt", "--lines"])
        .assert()
        .success()
        .stdout("one\ntwo\n");

    Ok(())
}

#[test]
fn test_write_creates_parent_directories() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["write", "out/nested/deeper/file.txt", "  kept as is  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(helper.path("out/nested/deeper/file.txt"))?;
    assert_eq!(written, "  kept as is  ");

    Ok(())
}

#[test]
fn test_check_dir_success() -> Result<()> {
    let helper = CliTestHelper::new();
    fs::create_dir_all(helper.path("data"))?;

    helper
        .command()
        .args(["check-dir", "./data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a directory"));

    Ok(())
}

#[test]
fn test_parse_yaml_to_json() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("app.yml", "name: demo\nports: [80, 443]\n")?;

    let output = helper
        .command()
        .args(["parse", "app.yml"])
        .assert()
        .success()
        .get_output()
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed, serde_json::json!({"name": "demo", "ports": [80, 443]}));

    Ok(())
}

#[test]
fn test_parse_json_with_explicit_format() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_file("payload.txt", r#"{"a": 1}"#)?;

    helper
        .command()
        .args(["parse", "payload.txt", "--format", "json", "--output", "yaml"])
        .assert()
        .success()
        .stdout("a: 1\n");

    Ok(())
}

#[test]
fn test_config_get_and_validate() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("yaml:\n  safe_mode: false\n")?;

    helper
        .command()
        .args(["config", "get", "yaml.safe_mode"])
        .assert()
        .success()
        .stdout("false\n");

    helper
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));

    Ok(())
}

#[test]
fn test_version() {
    let helper = CliTestHelper::new();
    helper.command().arg("--version").assert().success();
}
