//! Integration tests comparing CLI output with the core Display implementations
//!
//! The CLI and the MCP server both render through the same Display impls, so
//! what the binary prints must match what the library formats directly.

use std::process::Command;

use lessonloop_core::{
    display::{CreateResult, DeleteResult},
    params::{CheckSeries, CreateClosure, Id, ListClosures},
    Scheduler, SchedulerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test scheduler with temporary database
async fn create_test_scheduler() -> (Scheduler, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create scheduler");

    (scheduler, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lessonloop"));
    cmd.env_remove("LESSONLOOP_ORG")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_created_closure_display_consistency() {
    let (scheduler, temp_dir) = create_test_scheduler().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let cli_output = run_cli_command(db_str, &["closure", "add", "2025-12-25", "Christmas Day"]);

    let stored = scheduler
        .list_closures(&ListClosures {
            from: "2025-12-25".to_string(),
            to: "2025-12-25".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);

    let direct_output = CreateResult::new(stored[0].clone()).to_string();
    assert_eq!(cli_output, direct_output);
}

#[tokio::test]
async fn test_deleted_closure_display_consistency() {
    let (scheduler, temp_dir) = create_test_scheduler().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let closure = scheduler
        .create_closure(&CreateClosure {
            date: "2025-05-26".to_string(),
            reason: "Bank holiday".to_string(),
            location_id: Some("hall-a".to_string()),
            all_locations: false,
        })
        .await
        .unwrap();
    let expected = DeleteResult::new(closure.clone()).to_string();

    let cli_output = run_cli_command(db_str, &["closure", "remove", &closure.id.to_string()]);
    assert_eq!(cli_output, expected);

    assert!(scheduler.delete_closure(&Id { id: closure.id }).await.is_err());
}

#[tokio::test]
async fn test_series_check_display_consistency() {
    let (scheduler, temp_dir) = create_test_scheduler().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    for (date, reason) in [("2025-01-13", "Staff training"), ("2025-01-27", "Open day")] {
        scheduler
            .create_closure(&CreateClosure {
                date: date.to_string(),
                reason: reason.to_string(),
                location_id: None,
                all_locations: true,
            })
            .await
            .unwrap();
    }

    let check = scheduler
        .check_series(&CheckSeries {
            start_date: Some("2025-01-06".to_string()),
            interval_weeks: 1,
            total_lessons: 6,
            location_id: None,
        })
        .await
        .unwrap();
    assert_eq!(
        check.report.warning_message.as_deref(),
        Some("2 of 6 lessons fall on closure dates")
    );

    let cli_output = run_cli_command(db_str, &["check", "2025-01-06", "--lessons", "6"]);
    assert_eq!(cli_output, format!("# Closure check\n\n{check}"));
}
