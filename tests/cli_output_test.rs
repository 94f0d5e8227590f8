use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const LOGGER_CONFIG: &str = r#"{
  "catalog": { "path": "catalog.json" },
  "logger": { "dir": "logs", "name": "library-catalog", "level": "DEBUG", "rotation": "NEVER" }
}"#;

fn run(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_library-catalog"))
        .current_dir(workdir)
        .env("RUN_MODE", "development")
        .env_remove("LIBRARY__CATALOG__PATH")
        .args(args)
        .output()
        .unwrap()
}

fn workdir_with_debug_logging() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::write(dir.path().join("config").join("development.json"), LOGGER_CONFIG).unwrap();
    dir
}

#[test]
fn test_stdout_holds_only_command_results() {
    let dir = workdir_with_debug_logging();

    assert!(run(dir.path(), &["init"]).status.success());
    let added = run(dir.path(), &["add", "Carrie", "Stephen King", "1974", "9780307743664"]);
    assert!(added.status.success());
    assert_eq!(
        String::from_utf8(added.stdout).unwrap(),
        "Added 9780307743664 - Carrie (1974) [Stephen King] AVAILABLE\n"
    );

    let listed = run(dir.path(), &["list"]);
    assert!(listed.status.success());
    assert_eq!(
        String::from_utf8(listed.stdout).unwrap(),
        "9780307743664 - Carrie (1974) [Stephen King] AVAILABLE\n"
    );

    let stderr = String::from_utf8(listed.stderr).unwrap();
    assert!(stderr.lines().all(|line| line.starts_with('{')), "{}", stderr);
    assert!(fs::read_dir(dir.path().join("logs")).unwrap().next().is_some());
}

#[test]
fn test_failure_goes_to_stderr_with_exit_code() {
    let dir = workdir_with_debug_logging();

    let output = run(dir.path(), &["find", "9780307743664"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: File does not exist"), "{}", stderr);
}
