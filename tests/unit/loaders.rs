/// Exit-policy and propagate-policy behavior of the loaders
use anyhow::Result;
use loadkit::document::{DocumentParser, JsonParser, YamlOptions, YamlParser};
use loadkit::files;
use loadkit::handler::RecordFailures;
use loadkit::loader::Loader;
use loadkit::paths::DirectoryError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn loader() -> Loader<RecordFailures> {
    Loader::with_handler(RecordFailures::new(), YamlOptions::default())
}

#[test]
fn test_load_as_string_trims_outer_whitespace_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("greeting.txt");
    fs::write(&path, "  hello world  \n")?;

    assert_eq!(loader().load_as_string(&path, "unreadable")?, "hello world");
    Ok(())
}

#[test]
fn test_load_as_lines_keeps_terminators() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("hosts");
    fs::write(&path, "alpha\nbeta\n")?;

    assert_eq!(loader().load_as_lines(&path, "unreadable")?, vec!["alpha\n", "beta\n"]);
    Ok(())
}

#[test]
fn test_read_trimmed_missing_file_returns_error_without_handler() {
    let temp_dir = TempDir::new().unwrap();
    let result = files::read_trimmed(&temp_dir.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_json_from_string_success_and_failure() {
    let loader = loader();

    let document = loader.json_from_string(r#"{"a": 1}"#, "bad payload").unwrap();
    assert_eq!(serde_json::Value::Object(document), json!({"a": 1}));
    assert!(loader.handler().is_empty());

    assert!(loader.json_from_string("{a:1}", "bad payload").is_err());
    let lines = loader.handler().last().unwrap();
    assert_eq!(lines.last().map(String::as_str), Some("bad payload"));
}

#[test]
fn test_write_string_creates_intermediate_directories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("x/y/z/out.txt");
    let content = "\n  untouched content \n\n";

    loader().write_string(&path, content, "cannot write")?;
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn test_write_string_failure_goes_to_handler() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory")?;

    let loader = loader();
    let err = loader
        .write_string(&blocker.join("child.txt"), "x", "cannot write child")
        .unwrap_err();

    assert_eq!(err.to_string(), "cannot write child");
    assert_eq!(loader.handler().count(), 1);
    Ok(())
}

#[test]
fn test_assert_directory_exists_on_regular_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("regular.txt");
    fs::write(&file, "x")?;

    let loader = loader();
    let err = loader
        .assert_directory_exists(&file, "output dir required")
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DirectoryError>(),
        Some(DirectoryError::NotADirectory(_))
    ));
    let lines = loader.handler().last().unwrap();
    assert!(lines[0].starts_with("Path is not a directory, check:"));
    assert_eq!(lines[1], "output dir required");
    Ok(())
}

#[test]
fn test_both_formats_offer_file_loading_with_exit_policy() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let json_path = temp_dir.path().join("a.json");
    let yaml_path = temp_dir.path().join("a.yaml");
    fs::write(&json_path, r#"{"k": [1, 2]}"#)?;
    fs::write(&yaml_path, "k: [1, 2]\n")?;

    let loader = loader();
    let from_json = loader.load_from_file(&JsonParser, &json_path, "json")?;
    let from_yaml = loader.load_from_file(&YamlParser::default(), &yaml_path, "yaml")?;

    assert_eq!(from_json["k"], json!([1, 2]));
    assert_eq!(
        serde_json::to_value(&from_yaml)?,
        json!({"k": [1, 2]})
    );

    assert!(loader.load_from_file(&JsonParser, &temp_dir.path().join("none.json"), "json").is_err());
    assert_eq!(loader.handler().count(), 1);
    Ok(())
}

#[test]
fn test_parsers_propagate_without_handler() {
    assert!(JsonParser.parse_str("{a:1}").is_err());
    assert!(YamlParser::default().parse_str("a: [").is_err());
    assert!(
        YamlParser::default()
            .parse_file(std::path::Path::new("/definitely/not/here.yaml"))
            .is_err()
    );
}
