use lessonloop_core::{params::CreateClosure, Scheduler, SchedulerBuilder};
use tempfile::TempDir;

/// Helper function to create a test scheduler
pub async fn create_test_scheduler(org_id: &str) -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_organisation(org_id)
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

/// Closure parameters for an organisation-wide closure
#[allow(dead_code)]
pub fn org_wide(date: &str, reason: &str) -> CreateClosure {
    CreateClosure {
        date: date.to_string(),
        reason: reason.to_string(),
        location_id: None,
        all_locations: true,
    }
}

/// Closure parameters for a closure at one location
#[allow(dead_code)]
pub fn at_location(date: &str, reason: &str, location_id: &str) -> CreateClosure {
    CreateClosure {
        date: date.to_string(),
        reason: reason.to_string(),
        location_id: Some(location_id.to_string()),
        all_locations: false,
    }
}
