use super::fixtures;
use clap::Parser;
use cleanup_examples::cli::{args::OutputFormat, Args, Command};
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Output};

/// Run the binary inside `cwd` with an isolated user config directory
fn run_binary(cwd: &Path, args: &[&str]) -> Output {
    let config_home = tempfile::TempDir::new().unwrap();
    Process::new(env!("CARGO_BIN_EXE_cleanup-examples"))
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["cleanup-examples"]);
    assert!(!args.dry_run);
    assert_eq!(args.path, None);
    assert_eq!(args.marker, None);
    assert!(args.dirs.is_empty());
    assert!(args.exclude.is_empty());
    assert!(args.output.is_none());
    assert!(!args.no_imports);

    let args = Args::parse_from([
        "cleanup-examples",
        "--preview",
        "--path", "/work/app",
        "--marker", "Demo",
        "--dir", "internal",
        "--dir", "pkg",
        "--exclude", "testdata",
        "--no-imports",
        "--output", "json",
        "--quiet",
    ]);

    assert!(args.dry_run);
    assert_eq!(args.path, Some(PathBuf::from("/work/app")));
    assert_eq!(args.marker.as_deref(), Some("Demo"));
    assert_eq!(args.dirs, vec!["internal".to_string(), "pkg".to_string()]);
    assert_eq!(args.exclude, vec!["testdata".to_string()]);
    assert!(args.no_imports);
    assert!(matches!(args.output, Some(OutputFormat::Json)));
    assert!(args.quiet);
}

#[test]
fn test_cli_rejects_unknown_output_format() {
    assert!(Args::try_parse_from(["cleanup-examples", "--output", "yaml"]).is_err());
}

#[test]
fn test_cli_init_command() {
    let args = Args::parse_from(["cleanup-examples", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}

#[test]
fn test_binary_json_report() {
    let project = fixtures::sample_project();
    let root = project.path();

    let output = run_binary(root, &["--no-imports", "--output", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "apply");
    assert_eq!(report["import_fix"], "skipped");
    assert_eq!(report["changes"].as_array().unwrap().len(), 6);
    assert_eq!(report["changes"][0]["path"], "internal/handler/koo_user.go");
    assert_eq!(report["changes"][0]["action"], "deleted");

    assert!(!root.join("internal/handler/koo_user.go").exists());
}

#[test]
fn test_binary_dry_run_text() {
    let project = fixtures::sample_project();
    let root = project.path();
    let before = fixtures::snapshot(root);

    let output = run_binary(root, &["--dry-run", "--no-colors"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== DRY RUN MODE - No changes will be made ==="));
    assert!(stdout.contains("Deleting koo_* files..."));
    assert!(stdout.contains("Would delete: internal/handler/koo_user.go"));
    assert!(stdout.contains("Would modify: internal/server/routes.go"));
    assert!(stdout.contains("Next steps:"));
    assert!(stdout.contains("Run 'go mod tidy' to clean up dependencies"));

    assert_eq!(fixtures::snapshot(root), before);
}

#[test]
fn test_binary_missing_manifest_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_binary(dir.path(), &["--no-imports"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error finding project root"));
}

#[test]
fn test_binary_invalid_marker_is_critical() {
    let project = fixtures::sample_project();

    let output = run_binary(project.path(), &["--marker", "not-valid", "--no-imports"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(project.path().join("internal/handler/koo_user.go").exists());
}

#[test]
fn test_binary_init_writes_config() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = run_binary(dir.path(), &["--init"]);
    assert!(output.status.success());
    assert!(dir.path().join(".cleanup-examples.toml").exists());

    // A second init leaves the file alone
    let output = run_binary(dir.path(), &["--init"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));
}
