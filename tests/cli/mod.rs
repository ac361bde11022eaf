/// CLI integration tests that exercise the actual binary with assert_cmd.
///
/// Use `CliTestHelper::command()` to run inside a temporary project:
/// ```rust
/// helper.command()
///     .args(["cat", "notes.txt"])
///     .assert()
///     .success()
///     .stdout(predicate::str::contains("hello"));
/// ```
pub mod commands;
