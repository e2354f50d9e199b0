//! Tests for the SQLite score repository.

use tempfile::TempDir;

use strictly_guess::ScoreRepository;

/// Creates a fresh store in a temporary directory. The directory handle must
/// stay in scope to keep the database file alive.
fn setup_test_db() -> (TempDir, ScoreRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("scores.db")
        .to_str()
        .expect("Invalid path")
        .to_string();
    let repo = ScoreRepository::open(db_path).expect("Failed to open store");
    (dir, repo)
}

#[test]
fn test_persist_returns_stored_entry() {
    let (_db, repo) = setup_test_db();
    let entry = repo.persist("Ann", 3).expect("Persist failed");
    assert_eq!(entry.name(), "Ann");
    assert_eq!(*entry.attempts(), 3);
    assert!(*entry.id() > 0);

    let all = repo.list_all().expect("List failed");
    assert_eq!(all, vec![entry]);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let (_db, repo) = setup_test_db();
    let first = repo.persist("Ann", 5).expect("Persist failed");
    let second = repo.persist("Bob", 2).expect("Persist failed");
    let third = repo.persist("Cid", 8).expect("Persist failed");
    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
}

#[test]
fn test_same_name_creates_separate_rows() {
    let (_db, repo) = setup_test_db();
    repo.persist("Ann", 4).expect("Persist failed");
    repo.persist("Ann", 4).expect("Persist failed");
    assert_eq!(repo.list_all().expect("List failed").len(), 2);
}

#[test]
fn test_empty_name_is_rejected() {
    let (_db, repo) = setup_test_db();
    assert!(repo.persist("", 3).is_err());
    assert!(repo.list_all().expect("List failed").is_empty());
}

#[test]
fn test_zero_attempts_is_rejected() {
    let (_db, repo) = setup_test_db();
    assert!(repo.persist("Ann", 0).is_err());
    assert!(repo.list_all().expect("List failed").is_empty());
}

#[test]
fn test_list_all_empty_store() {
    let (_db, repo) = setup_test_db();
    assert!(repo.list_all().expect("List failed").is_empty());
}

#[test]
fn test_reopen_keeps_existing_scores() {
    let (_db, repo) = setup_test_db();
    let saved = repo.persist("Ann", 6).expect("Persist failed");

    let reopened =
        ScoreRepository::open(repo.db_path().to_string()).expect("Second open failed");
    assert_eq!(reopened.list_all().expect("List failed"), vec![saved]);

    let next = reopened.persist("Bob", 1).expect("Persist failed");
    assert!(*next.id() > 0);
    assert_eq!(reopened.list_all().expect("List failed").len(), 2);
}

#[test]
fn test_list_by_name_orders_best_first() {
    let (_db, repo) = setup_test_db();
    repo.persist("Ann", 7).expect("Persist failed");
    repo.persist("Bob", 1).expect("Persist failed");
    repo.persist("Ann", 3).expect("Persist failed");

    let ann = repo.list_by_name("Ann").expect("List failed");
    let attempts: Vec<i32> = ann.iter().map(|e| *e.attempts()).collect();
    assert_eq!(attempts, vec![3, 7]);
    assert!(repo.list_by_name("Nobody").expect("List failed").is_empty());
}

#[test]
fn test_timestamp_parses() {
    let (_db, repo) = setup_test_db();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);
    let entry = repo.persist("Ann", 2).expect("Persist failed");
    let at = entry.recorded_at().expect("Timestamp should parse");
    assert!(at >= before);
    assert!(entry.timestamp().ends_with('Z'));
    assert_eq!(entry.display_date().len(), "05/01/2024".len());
}

#[test]
fn test_open_fails_for_unusable_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("missing")
        .join("scores.db")
        .to_str()
        .expect("Invalid path")
        .to_string();
    assert!(ScoreRepository::open(db_path).is_err());
}
