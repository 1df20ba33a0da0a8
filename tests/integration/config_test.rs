use super::fixtures::write;
use cleanup_examples::{
    config::{load_config_with_env_prefix, CliArgs},
    output::Console,
    Cleaner, OutputFormat, RunMode,
};
use std::fs;
use tempfile::TempDir;

const STORE_GO: &str = "package store\n\
\n\
type Store struct {\n\
\tName       string\n\
\tDemoWidget *Widget\n\
}\n\
\n\
func DemoReset() {}\n";

fn demo_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "go.mod", "module example.com/demo\n");
    write(root, "internal/app/demo_widget.go", "package app\n\ntype DemoWidget struct{}\n");
    write(root, "internal/app/koo_user.go", "package app\n\ntype KooUser struct{}\n");
    write(root, "pkg/store/store.go", STORE_GO);
    write(root, "pkg/generated/gen.go", "package generated\n\ntype DemoGen struct{}\n");
    write(root, "migrations/0001_demo_items.sql", "CREATE TABLE demo_items (id int);\n");
    write(
        root,
        "cleanup.toml",
        r#"
marker = "Demo"
process_dirs = ["internal", "pkg"]
exclude_patterns = ["vendor", "generated"]
fix_imports = false
output_format = "json"
"#,
    );
    dir
}

#[test]
fn test_config_file_drives_the_run() {
    let project = demo_project();
    let root = project.path();

    let settings = load_config_with_env_prefix(
        CliArgs {
            path: Some(root.to_path_buf()),
            config: Some(root.join("cleanup.toml")),
            ..Default::default()
        },
        "CLEANUP_EXAMPLES_IT_CONFIG_FILE",
    )
    .unwrap();

    assert_eq!(settings.marker, "Demo");
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert!(!settings.fix_imports);

    let report = Cleaner::new(settings.clone(), Console::silent())
        .unwrap()
        .run(settings.mode)
        .unwrap();

    assert!(!root.join("internal/app/demo_widget.go").exists());
    assert!(!root.join("migrations/0001_demo_items.sql").exists());
    assert!(root.join("internal/app/koo_user.go").exists());
    assert!(root.join("pkg/generated/gen.go").exists());

    let store = fs::read_to_string(root.join("pkg/store/store.go")).unwrap();
    assert!(store.contains("\tName       string\n"));
    assert!(!store.contains("DemoWidget"));
    assert!(!store.contains("DemoReset"));

    assert_eq!(report.deleted().count(), 2);
    assert_eq!(report.modified().count(), 1);
}

#[test]
fn test_cli_overrides_config_file() {
    let project = demo_project();
    let root = project.path();

    let settings = load_config_with_env_prefix(
        CliArgs {
            path: Some(root.to_path_buf()),
            config: Some(root.join("cleanup.toml")),
            dirs: Some(vec!["internal".to_string()]),
            dry_run: true,
            ..Default::default()
        },
        "CLEANUP_EXAMPLES_IT_CONFIG_CLI",
    )
    .unwrap();

    assert_eq!(settings.process_dirs, vec!["internal".to_string()]);
    assert_eq!(settings.mode, RunMode::Preview);

    let report = Cleaner::new(settings.clone(), Console::silent())
        .unwrap()
        .run(settings.mode)
        .unwrap();

    // pkg is no longer rewritten and preview leaves the tree alone
    assert_eq!(report.modified().count(), 0);
    assert_eq!(report.deleted().count(), 2);
    assert!(root.join("internal/app/demo_widget.go").exists());
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "cleanup.toml", "marker = \"Koo\"\nmax_depth = 3\n");

    let err = load_config_with_env_prefix(
        CliArgs {
            path: Some(dir.path().to_path_buf()),
            config: Some(path),
            ..Default::default()
        },
        "CLEANUP_EXAMPLES_IT_CONFIG_UNKNOWN",
    )
    .unwrap_err();

    assert!(err.is_critical());
}
