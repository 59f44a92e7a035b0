//! Library integration tests.

use gas_bootstrap::requirements::{check_all, missing, CATALOG};
use gas_bootstrap::shell::{MockOutcome, MockRunner};
use gas_bootstrap::BootstrapError;

#[test]
fn error_types_are_public() {
    let err = BootstrapError::InstallActionFailed {
        dependency: "jq".into(),
    };
    assert!(err.to_string().contains("jq"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gas_bootstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn catalog_covers_script_dependencies() {
    let names: Vec<_> = CATALOG.iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["bash", "git", "jq"]);
}

#[test]
fn evaluation_never_fails() {
    let mut runner = MockRunner::new();
    runner.on("git --version", MockOutcome::Signal(9));

    let statuses = check_all(CATALOG, &mut runner);
    assert_eq!(missing(&statuses).len(), 3);
}

#[test]
fn ui_and_platform_types_are_public() {
    use gas_bootstrap::detection::{detect_platform_with, OsFamily};
    use gas_bootstrap::ui::{resolve_answer, MockUI, UserInterface};

    let platform = detect_platform_with("linux", |p| p.ends_with("arch-release"), |_| false);
    assert_eq!(platform.os, OsFamily::Arch);

    let mut ui = MockUI::new();
    ui.message("hello");
    assert!(ui.has_message("hello"));
    assert!(!resolve_answer("no"));
}
