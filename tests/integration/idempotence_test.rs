use super::fixtures;
use cleanup_examples::{output::Console, Cleaner, RunMode, Settings};

fn cleaner_for(root: &std::path::Path) -> Cleaner {
    let settings = Settings {
        start_path: root.to_path_buf(),
        fix_imports: false,
        ..Settings::default()
    };
    Cleaner::new(settings, Console::silent()).unwrap()
}

#[test]
fn test_second_run_changes_nothing() {
    let project = fixtures::sample_project();
    let root = project.path();

    let first = cleaner_for(root).run(RunMode::Apply).unwrap();
    assert!(!first.is_clean());
    let after_first = fixtures::snapshot(root);

    let second = cleaner_for(root).run(RunMode::Apply).unwrap();
    assert!(second.is_clean(), "second run still found {:?}", second.changes);
    assert_eq!(fixtures::snapshot(root), after_first);
}

#[test]
fn test_clean_project_is_untouched() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fixtures::write(root, "go.mod", "module example.com/plain\n");
    fixtures::write(root, "internal/handler/health.go", fixtures::HEALTH_GO);
    let before = fixtures::snapshot(root);

    let report = cleaner_for(root).run(RunMode::Apply).unwrap();

    assert!(report.is_clean());
    assert_eq!(fixtures::snapshot(root), before);
}
