use super::fixtures::{self, HANDLER_GO_CLEANED, HEALTH_GO, ROUTES_GO_CLEANED};
use cleanup_examples::{
    output::Console,
    parsers::GoParser,
    Cleaner, CleanupError, FileAction, ImportFixStatus, RunMode, Settings,
};
use std::fs;
use std::path::{Path, PathBuf};

fn settings_for(root: &Path) -> Settings {
    Settings {
        start_path: root.to_path_buf(),
        fix_imports: false,
        ..Settings::default()
    }
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_end_to_end_cleanup() {
    let project = fixtures::sample_project();
    let root = project.path();

    let cleaner = Cleaner::new(settings_for(root), Console::silent()).unwrap();
    let report = cleaner.run(RunMode::Apply).unwrap();

    // Marked files are gone, everything else survives
    assert!(!root.join("internal/handler/koo_user.go").exists());
    assert!(!root.join("internal/service/koo_user.go").exists());
    assert!(!root.join("migrations/20240101000000_koo_users.sql").exists());
    assert!(root.join("migrations/20240101000001_init.sql").exists());
    assert!(root.join("go.mod").exists());

    assert_eq!(read(root, "internal/handler/handler.go"), HANDLER_GO_CLEANED);
    assert_eq!(read(root, "internal/server/routes.go"), ROUTES_GO_CLEANED);
    assert_eq!(read(root, "internal/handler/health.go"), HEALTH_GO);

    let service = read(root, "internal/service/service.go");
    assert!(service.contains("HealthService  HealthService"));
    assert!(service.contains("// NewServices wires every service."));
    assert!(!service.contains("KooUserService"));
    assert!(!service.contains("KooSeed"));
    assert!(!service.contains("fills the demo tables"));

    let deleted: Vec<PathBuf> = report.deleted().map(|c| c.path.clone()).collect();
    assert_eq!(
        deleted,
        vec![
            PathBuf::from("internal/handler/koo_user.go"),
            PathBuf::from("internal/service/koo_user.go"),
            PathBuf::from("migrations/20240101000000_koo_users.sql"),
        ]
    );

    let modified: Vec<(PathBuf, usize)> = report
        .modified()
        .map(|c| (c.path.clone(), c.removals))
        .collect();
    assert_eq!(
        modified,
        vec![
            (PathBuf::from("internal/handler/handler.go"), 3),
            (PathBuf::from("internal/server/routes.go"), 2),
            (PathBuf::from("internal/service/service.go"), 3),
        ]
    );
    assert_eq!(report.import_fix, ImportFixStatus::Skipped);
}

#[test]
fn test_rewritten_files_still_parse() {
    let project = fixtures::sample_project();
    let root = project.path();

    Cleaner::new(settings_for(root), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap();

    let mut parser = GoParser::new().unwrap();
    for rel in [
        "internal/handler/handler.go",
        "internal/server/routes.go",
        "internal/service/service.go",
    ] {
        let path = root.join(rel);
        let text = fs::read_to_string(&path).unwrap();
        assert!(parser.check_syntax(&path, &text).is_ok(), "{} no longer parses", rel);
    }
}

#[test]
fn test_excluded_directories_are_left_alone() {
    let project = fixtures::sample_project();
    let root = project.path();

    let report = Cleaner::new(settings_for(root), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap();

    assert!(root.join("vendor/example.com/lib/koo_vendored.go").exists());
    assert!(report.changes.iter().all(|c| !c.path.starts_with("vendor")));
}

#[test]
fn test_run_from_nested_directory_finds_root() {
    let project = fixtures::sample_project();
    let root = project.path();

    let settings = Settings {
        start_path: root.join("internal/server"),
        ..settings_for(root)
    };
    let report = Cleaner::new(settings, Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap();

    assert_eq!(report.project_root, root.canonicalize().unwrap());
    assert!(!root.join("internal/handler/koo_user.go").exists());
}

#[test]
fn test_missing_manifest_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    fixtures::write(dir.path(), "internal/app/app.go", "package app\n");

    let err = Cleaner::new(settings_for(dir.path()), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap_err();

    assert!(matches!(err, CleanupError::ProjectRootNotFound { .. }));
    assert!(err.user_message().starts_with("Error finding project root"));
}

#[test]
fn test_parse_error_stops_before_rewriting_later_files() {
    let project = fixtures::sample_project();
    let root = project.path();
    fixtures::write(root, "internal/handler/broken.go", "package handler\n\nfunc Broken( {\n");

    let err = Cleaner::new(settings_for(root), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap_err();

    assert!(matches!(err, CleanupError::Parse { .. }));
    // Deletions already happened; files after the broken one are untouched
    assert!(!root.join("internal/handler/koo_user.go").exists());
    assert_eq!(read(root, "internal/server/routes.go"), fixtures::ROUTES_GO);
}

#[test]
fn test_deleted_files_are_reported_first() {
    let project = fixtures::sample_project();
    let report = Cleaner::new(settings_for(project.path()), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap();

    let first_modified = report
        .changes
        .iter()
        .position(|c| c.action == FileAction::Modified)
        .unwrap();
    assert!(report.changes[..first_modified]
        .iter()
        .all(|c| c.action == FileAction::Deleted));
}
