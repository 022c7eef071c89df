use jiff::civil::date;
use lessonloop_core::{ClosureDate, Database, DateRange, SchedulingError};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn january() -> DateRange {
    DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap()
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_reopening_database_keeps_rows() {
    let (temp_file, mut db) = create_test_db();
    db.insert_closure("org-1", &ClosureDate::all_locations(date(2025, 1, 13), "Staff training"))
        .expect("Failed to insert closure");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_closures("org-1", january()).unwrap().len(), 1);
}

#[test]
fn test_insert_and_get_closure() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .insert_closure(
            "org-1",
            &ClosureDate::at_location(date(2025, 2, 17), "Half term", "hall-a"),
        )
        .expect("Failed to insert closure");
    assert!(created.id > 0);

    let fetched = db
        .get_closure("org-1", created.id)
        .expect("Failed to get closure")
        .expect("Closure should exist");
    assert_eq!(fetched, created);
    assert_eq!(fetched.location_id.as_deref(), Some("hall-a"));
    assert!(!fetched.applies_to_all_locations);

    assert!(db.get_closure("org-2", created.id).unwrap().is_none());
}

#[test]
fn test_insert_rejects_conflicting_scope() {
    let (_temp_file, mut db) = create_test_db();

    let mut closure = ClosureDate::all_locations(date(2025, 1, 13), "Staff training");
    closure.location_id = Some("hall-a".to_string());

    let result = db.insert_closure("org-1", &closure);
    assert!(matches!(result, Err(SchedulingError::InvalidInput { .. })));
}

#[test]
fn test_list_closures_is_inclusive_and_ordered() {
    let (_temp_file, mut db) = create_test_db();

    for (day, reason) in [(31, "Month end"), (1, "New Year"), (13, "Training"), (13, "Second")] {
        db.insert_closure("org-1", &ClosureDate::all_locations(date(2025, 1, day), reason))
            .unwrap();
    }
    db.insert_closure("org-1", &ClosureDate::all_locations(date(2025, 2, 1), "February"))
        .unwrap();
    db.insert_closure("org-2", &ClosureDate::all_locations(date(2025, 1, 13), "Other org"))
        .unwrap();

    let closures = db.list_closures("org-1", january()).unwrap();
    let reasons: Vec<&str> = closures.iter().map(|c| c.reason.as_str()).collect();
    assert_eq!(reasons, vec!["New Year", "Training", "Second", "Month end"]);
}

#[test]
fn test_delete_closure_returns_row() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .insert_closure("org-1", &ClosureDate::unscoped(date(2025, 1, 20), "Piano tuning"))
        .unwrap();

    assert!(db.delete_closure("org-2", created.id).unwrap().is_none());

    let deleted = db
        .delete_closure("org-1", created.id)
        .unwrap()
        .expect("Closure should have been deleted");
    assert_eq!(deleted.reason, "Piano tuning");
    assert!(db.get_closure("org-1", created.id).unwrap().is_none());
}

#[test]
fn test_block_scheduling_flag() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.get_block_scheduling("org-1").unwrap(), None);

    db.set_block_scheduling("org-1", Some(false)).unwrap();
    assert_eq!(db.get_block_scheduling("org-1").unwrap(), Some(false));

    db.set_block_scheduling("org-1", Some(true)).unwrap();
    assert_eq!(db.get_block_scheduling("org-1").unwrap(), Some(true));

    db.set_block_scheduling("org-1", None).unwrap();
    assert_eq!(db.get_block_scheduling("org-1").unwrap(), None);
    assert_eq!(db.get_block_scheduling("org-2").unwrap(), None);
}

#[test]
fn test_preferences_crud() {
    let (_temp_file, mut db) = create_test_db();

    db.set_preference("alice", "banner:closures", "1").unwrap();
    db.set_preference("alice", "hint:drag", "1").unwrap();
    db.set_preference("alice", "draft:notes", "Scales").unwrap();
    db.set_preference("bob", "banner:welcome", "1").unwrap();

    assert_eq!(
        db.get_preference("alice", "draft:notes").unwrap().as_deref(),
        Some("Scales")
    );
    db.set_preference("alice", "draft:notes", "Arpeggios").unwrap();
    assert_eq!(
        db.get_preference("alice", "draft:notes").unwrap().as_deref(),
        Some("Arpeggios")
    );

    assert_eq!(
        db.list_preference_keys("alice", "banner:").unwrap(),
        vec!["banner:closures".to_string()]
    );

    assert!(db.delete_preference("alice", "hint:drag").unwrap());
    assert!(!db.delete_preference("alice", "hint:drag").unwrap());
    assert_eq!(db.get_preference("alice", "hint:drag").unwrap(), None);
}
