use super::fixtures;
use cleanup_examples::{output::Console, Cleaner, ImportFixStatus, RunMode, Settings};

fn settings_for(root: &std::path::Path) -> Settings {
    Settings {
        start_path: root.to_path_buf(),
        fix_imports: false,
        ..Settings::default()
    }
}

#[test]
fn test_preview_touches_nothing() {
    let project = fixtures::sample_project();
    let root = project.path();
    let before = fixtures::snapshot(root);

    let report = Cleaner::new(settings_for(root), Console::silent())
        .unwrap()
        .run(RunMode::Preview)
        .unwrap();

    assert_eq!(report.mode, RunMode::Preview);
    assert_eq!(report.deleted().count(), 3);
    assert_eq!(report.modified().count(), 3);
    assert_eq!(fixtures::snapshot(root), before);
}

#[test]
fn test_preview_reports_what_apply_does() {
    let project = fixtures::sample_project();
    let root = project.path();
    let cleaner = Cleaner::new(settings_for(root), Console::silent()).unwrap();

    let preview = cleaner.run(RunMode::Preview).unwrap();
    let apply = cleaner.run(RunMode::Apply).unwrap();

    assert_eq!(preview.changes, apply.changes);
}

#[test]
fn test_preview_then_apply_matches_apply_alone() {
    let previewed = fixtures::sample_project();
    let direct = fixtures::sample_project();

    let cleaner = Cleaner::new(settings_for(previewed.path()), Console::silent()).unwrap();
    cleaner.run(RunMode::Preview).unwrap();
    cleaner.run(RunMode::Apply).unwrap();

    Cleaner::new(settings_for(direct.path()), Console::silent())
        .unwrap()
        .run(RunMode::Apply)
        .unwrap();

    assert_eq!(fixtures::snapshot(previewed.path()), fixtures::snapshot(direct.path()));
}

#[test]
fn test_preview_never_runs_import_fixer() {
    let project = fixtures::sample_project();
    let root = project.path();

    let settings = Settings {
        fix_imports: true,
        import_fixer: vec!["definitely-not-a-real-goimports-binary".to_string()],
        ..settings_for(root)
    };
    let report = Cleaner::new(settings, Console::silent())
        .unwrap()
        .run(RunMode::Preview)
        .unwrap();

    assert_eq!(report.import_fix, ImportFixStatus::Skipped);
}
