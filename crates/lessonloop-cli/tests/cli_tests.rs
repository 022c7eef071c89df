use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn lessonloop_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("lessonloop").expect("Failed to find lessonloop binary");
    cmd.env_remove("LESSONLOOP_ORG")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn add_closure(temp_dir: &TempDir, args: &[&str]) {
    lessonloop_cmd(temp_dir)
        .args(["closure", "add"])
        .args(args)
        .assert()
        .success();
}

#[test]
fn test_cli_add_closure_success() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["closure", "add", "2025-12-25", "Christmas Day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created closure date with ID: 1"))
        .stdout(predicate::str::contains("25/12/2025: Christmas Day (All locations)"));
}

#[test]
fn test_cli_add_closure_at_location() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["closure", "add", "2025-03-03", "Boiler repair", "--location", "hall-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Location hall-a)"));
}

#[test]
fn test_cli_add_closure_rejects_both_scopes() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args([
            "closure",
            "add",
            "2025-03-03",
            "Boiler repair",
            "--location",
            "hall-a",
            "--all-locations",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_add_closure_invalid_date() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["closure", "add", "25/12/2025", "Christmas Day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to add closure date"));
}

#[test]
fn test_cli_list_empty_closures() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["closure", "list", "--from", "2025-01-01", "--to", "2025-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Closure dates 01/01/2025 to 31/12/2025"))
        .stdout(predicate::str::contains("No closure dates found."));
}

#[test]
fn test_cli_list_closures_in_range() {
    let temp_dir = create_cli_test_environment();
    add_closure(&temp_dir, &["2025-02-17", "Half term"]);
    add_closure(&temp_dir, &["2025-07-21", "Summer holiday"]);

    lessonloop_cmd(&temp_dir)
        .args(["closure", "list", "--from", "2025-01-01", "--to", "2025-03-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17/02/2025: Half term"))
        .stdout(predicate::str::contains("Summer holiday").not());
}

#[test]
fn test_cli_closures_on_date() {
    let temp_dir = create_cli_test_environment();
    add_closure(&temp_dir, &["2025-03-03", "Boiler repair", "--location", "hall-a"]);
    add_closure(&temp_dir, &["2025-03-03", "Inset day"]);

    lessonloop_cmd(&temp_dir)
        .args(["closure", "on", "2025-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Boiler repair"))
        .stdout(predicate::str::contains("Inset day"));
}

#[test]
fn test_cli_remove_closure() {
    let temp_dir = create_cli_test_environment();
    add_closure(&temp_dir, &["2025-05-26", "Bank holiday"]);

    lessonloop_cmd(&temp_dir)
        .args(["closure", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted closure 'Bank holiday' on 26/05/2025 (ID: 1)",
        ));

    lessonloop_cmd(&temp_dir)
        .args(["closure", "remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Closure date with ID 1 not found"));
}

#[test]
fn test_cli_check_without_conflicts() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["check", "2025-01-06", "--lessons", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No closure conflicts across 4 lessons."));
}

#[test]
fn test_cli_check_reports_conflicts_and_succeeds() {
    let temp_dir = create_cli_test_environment();
    add_closure(&temp_dir, &["2025-01-13", "Staff training"]);
    add_closure(&temp_dir, &["2025-01-20", "Hall booked", "--location", "hall-b"]);

    lessonloop_cmd(&temp_dir)
        .args(["check", "2025-01-06", "--interval", "1", "--lessons", "4", "--location", "hall-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 lesson falls on a closure date (Staff training)",
        ))
        .stdout(predicate::str::contains("• Lesson 2 on 13/01/2025: Staff training"))
        .stdout(predicate::str::contains("Hall booked").not())
        .stdout(predicate::str::contains(
            "Lessons cannot be scheduled on closure dates for this organisation.",
        ));
}

#[test]
fn test_cli_check_rejects_zero_interval() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["check", "2025-01-06", "--interval", "0", "--lessons", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval_weeks"));
}

#[test]
fn test_cli_block_scheduling_setting() {
    let temp_dir = create_cli_test_environment();

    lessonloop_cmd(&temp_dir)
        .args(["settings", "block-scheduling"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closure dates for default: block (default)"));

    lessonloop_cmd(&temp_dir)
        .args(["settings", "block-scheduling", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closure dates for default: warn"));

    add_closure(&temp_dir, &["2025-01-13", "Staff training"]);
    lessonloop_cmd(&temp_dir)
        .args(["check", "2025-01-06", "--lessons", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closure dates are advisory for this organisation."));
}

#[test]
fn test_cli_organisations_are_separate() {
    let temp_dir = create_cli_test_environment();
    add_closure(&temp_dir, &["2025-01-13", "Staff training", "--all-locations"]);

    lessonloop_cmd(&temp_dir)
        .args(["--org", "hillside", "closure", "list", "--from", "2025-01-01", "--to", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No closure dates found."));

    lessonloop_cmd(&temp_dir)
        .env("LESSONLOOP_ORG", "default")
        .args(["closure", "list", "--from", "2025-01-01", "--to", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staff training"));
}

#[test]
fn test_cli_help_lists_commands() {
    Command::cargo_bin("lessonloop")
        .expect("Failed to find lessonloop binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("closure"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("serve"));
}
