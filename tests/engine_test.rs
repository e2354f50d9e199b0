//! End-to-end tests for the game facade and score service.

use tempfile::TempDir;

use strictly_guess::{
    DbError, FeedbackMarker, GameError, GuessOutcome, GuessingGame, Phase, ScoreService,
};

use FeedbackMarker::{Exact, Present};

fn setup_service() -> (TempDir, ScoreService) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("scores.db");
    let service = ScoreService::open(db_path.to_str().expect("Invalid path"));
    assert!(service.is_available());
    (dir, service)
}

#[tokio::test]
async fn test_winning_game_records_score() {
    let (_db, service) = setup_service();
    let mut game = GuessingGame::new(service.clone());
    game.load_scores().await.expect("Load failed");
    assert!(game.best_score().is_none());

    game.start_game_with_secret("Ann", "1234".parse().expect("Valid secret"))
        .expect("Valid name");

    let first = game.submit_guess("1243").await.expect("Valid guess");
    assert!(matches!(first, GuessOutcome::Continue(_)));
    assert_eq!(
        first.record().feedback().markers(),
        &[Exact, Exact, Present, Present]
    );

    match game.submit_guess("1234").await.expect("Valid guess") {
        GuessOutcome::Solved {
            attempts, score, ..
        } => {
            assert_eq!(attempts, 2);
            let score = score.expect("Score should be saved");
            assert_eq!(score.name(), "Ann");
            assert_eq!(*score.attempts(), 2);
        }
        GuessOutcome::Continue(_) => panic!("Matching guess should solve"),
    }

    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.scores().len(), 1);
    let best = game.best_score().expect("Leaderboard refreshed");
    assert_eq!(best.name(), "Ann");
    assert!(game.store_warning().is_none());

    let stored = service.scores().await.expect("Read failed");
    assert_eq!(stored.len(), 1);
    assert_eq!(*stored[0].attempts(), 2);
}

#[tokio::test]
async fn test_finished_game_records_only_once() {
    let (_db, service) = setup_service();
    let mut game = GuessingGame::new(service.clone());
    game.start_game_with_secret("Ann", "1234".parse().expect("Valid secret"))
        .expect("Valid name");
    game.submit_guess("1234").await.expect("Valid guess");

    let again = game.submit_guess("1234").await;
    assert!(matches!(again, Err(GameError::NotPlaying(Phase::Finished))));
    assert_eq!(service.scores().await.expect("Read failed").len(), 1);
}

#[tokio::test]
async fn test_best_score_across_players() {
    let (_db, service) = setup_service();
    service.record("Ann", 5).await.expect("Record failed");
    service.record("Bob", 2).await.expect("Record failed");
    service.record("Cid", 8).await.expect("Record failed");

    let mut game = GuessingGame::new(service);
    game.load_scores().await.expect("Load failed");

    let best = game.best_score().expect("Scores loaded");
    assert_eq!(best.name(), "Bob");
    assert_eq!(*best.attempts(), 2);
    let order: Vec<&str> = game.scores().iter().map(|e| e.name().as_str()).collect();
    assert_eq!(order, vec!["Bob", "Ann", "Cid"]);
}

#[tokio::test]
async fn test_record_and_refresh_includes_new_entry() {
    let (_db, service) = setup_service();
    service.record("Ann", 4).await.expect("Record failed");

    let recorded = service
        .record_and_refresh("Bob", 3)
        .await
        .expect("Record failed");
    let board = recorded.leaderboard.expect("Reload failed");
    assert_eq!(board.len(), 2);
    assert_eq!(board.best(), Some(&recorded.entry));
}

#[tokio::test]
async fn test_unavailable_store_keeps_game_playable() {
    let service = ScoreService::unavailable(DbError::new("disk gone"));
    let mut game = GuessingGame::new(service);
    assert!(game.store_warning().is_some());
    game.load_scores().await.expect("Skipped when unavailable");

    game.start_game_with_secret("Ann", "1234".parse().expect("Valid secret"))
        .expect("Valid name");
    match game.submit_guess("1234").await.expect("Valid guess") {
        GuessOutcome::Solved { score, .. } => assert!(score.is_none()),
        GuessOutcome::Continue(_) => panic!("Matching guess should solve"),
    }
    assert_eq!(game.phase(), Phase::Finished);
    assert!(game.scores().is_empty());
}

#[tokio::test]
async fn test_unavailable_service_fails_fast() {
    let service = ScoreService::unavailable(DbError::new("disk gone"));
    let err = service.record("Ann", 3).await.expect_err("Store unavailable");
    assert_eq!(err.message, "disk gone");
    assert!(service.leaderboard().await.is_err());
}

#[tokio::test]
async fn test_open_unusable_path_degrades() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("missing").join("scores.db");
    let service = ScoreService::open(db_path.to_str().expect("Invalid path"));
    assert!(!service.is_available());
}

#[tokio::test]
async fn test_random_game_can_be_started() {
    let (_db, service) = setup_service();
    let mut game = GuessingGame::new(service);
    assert!(matches!(game.start_game(""), Err(GameError::InvalidName)));
    game.start_game("Ann").expect("Valid name");
    assert_eq!(game.player(), Some("Ann"));
    assert_eq!(game.attempts(), 0);
    assert!(game.session().revealed_secret().is_none());
}
