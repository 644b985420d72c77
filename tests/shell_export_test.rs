// Shell navigation and log export through the public API

use bug_exorcist::export::{EXPORT_FILE_PREFIX, EXPORT_LOG_LINES};
use bug_exorcist::shell::menu_with_active;
use bug_exorcist::{
    LogExporter, Navigator, RealFileSystem, Route, ShellAction, ShellEffect, ShellState,
    TerminalViewer,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tempfile::TempDir;

/// Apply an action the way the app does and follow navigation effects
fn run(shell: &mut ShellState, navigator: &mut Navigator, action: ShellAction) -> ShellEffect {
    let effect = shell.apply(action);
    if let ShellEffect::Navigate(route) = effect {
        navigator.push(route);
    }
    effect
}

#[test]
fn test_menu_highlights_follow_navigation() {
    let mut shell = ShellState::new();
    let mut navigator = Navigator::default();

    for route in Route::ALL {
        run(&mut shell, &mut navigator, ShellAction::Navigate(route));

        let active: Vec<_> = menu_with_active(navigator.current_path())
            .filter(|(_, active)| *active)
            .map(|(item, _)| item.route)
            .collect();
        assert_eq!(active, vec![route]);
    }
}

#[test]
fn test_unknown_path_has_no_active_entry() {
    let navigator = Navigator::new("/settings/advanced");

    assert_eq!(navigator.current_route(), None);
    assert!(menu_with_active(navigator.current_path()).all(|(_, active)| !active));
}

#[test]
fn test_sidebar_and_search_toggles() {
    let mut shell = ShellState::new();
    let mut navigator = Navigator::default();

    run(&mut shell, &mut navigator, ShellAction::ToggleSidebar);
    assert!(!shell.sidebar_open());
    run(&mut shell, &mut navigator, ShellAction::ToggleSidebar);
    assert!(shell.sidebar_open());

    run(&mut shell, &mut navigator, ShellAction::ToggleSearch);
    assert!(shell.take_search_focus());
    run(
        &mut shell,
        &mut navigator,
        ShellAction::SetSearchQuery("segfault".to_string()),
    );
    assert_eq!(shell.search_query(), "segfault");

    // Searching never navigates anywhere
    assert_eq!(navigator.current_route(), Some(Route::Dashboard));
}

#[tokio::test]
async fn test_export_writes_record_into_export_dir() {
    let temp_dir = TempDir::new().unwrap();
    let export_dir = temp_dir.path().join("downloads");
    let exporter = LogExporter::new(Arc::new(RealFileSystem), export_dir.clone());

    let mut shell = ShellState::new();
    let mut navigator = Navigator::default();
    assert_eq!(
        run(&mut shell, &mut navigator, ShellAction::ExportLogs),
        ShellEffect::ExportLogs
    );

    let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
    let path = exporter.export_at(now).await.unwrap();

    assert_eq!(path.parent(), Some(export_dir.as_path()));
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(format!("{}{}.json", EXPORT_FILE_PREFIX, now.timestamp_millis()).as_str())
    );

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["system"], "BUG_EXORCIST");
    assert_eq!(value["status"], "Operational");
    assert_eq!(value["timestamp"], "2025-03-14T15:09:26.000Z");
    assert_eq!(value["logs"].as_array().map(Vec::len), Some(EXPORT_LOG_LINES.len()));
    assert!(content.contains("\n  \"system\""));
}

#[test]
fn test_terminal_scrolls_once_per_log_list() {
    let mut viewer = TerminalViewer::new(Some(Vec::new()));
    assert!(viewer.is_demo());
    assert!(viewer.take_scroll_request());
    assert!(!viewer.take_scroll_request());

    viewer.set_logs(vec!["[00:00:01] SYSTEM :: up".to_string()]);
    assert_eq!(viewer.current_logs(), vec!["[00:00:01] SYSTEM :: up"]);
    assert!(viewer.take_scroll_request());
}
