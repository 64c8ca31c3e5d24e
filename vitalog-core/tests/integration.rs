//! Integration tests for the vitalog storage, repository, seeding, and
//! view-model layers, run against real SQLite stores.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tempfile::TempDir;
use vitalog_core::db::Database;
use vitalog_core::seed::{DefaultDataSeeder, OffsetDirection, SeedOptions};
use vitalog_core::{
    AddSleepSessionViewModel, Error, ExerciseListViewModel, ExerciseRepository,
    SleepHistoryViewModel, SleepRepository, UserDataViewModel, UserRepository,
};

/// Fresh migrated in-memory store
fn test_db() -> Arc<Database> {
    vitalog_core::logging::init_test();
    let db = Database::open_in_memory().expect("database should open");
    db.migrate().expect("migrations should run");
    Arc::new(db)
}

/// Insert a user directly, the way external setup would
fn insert_user(db: &Database, first_name: &str, last_name: &str) {
    db.connection()
        .execute(
            "INSERT INTO users (first_name, last_name) VALUES (?1, ?2)",
            [first_name, last_name],
        )
        .expect("user insert should succeed");
}

// ============================================
// User repository
// ============================================

#[test]
fn test_get_user_on_empty_store_returns_none() {
    let db = test_db();
    let repo = UserRepository::new(db);

    assert!(repo.get_user().unwrap().is_none());
}

#[test]
fn test_get_user_returns_inserted_names() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");

    let user = UserRepository::new(db).get_user().unwrap().unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Eric"));
    assert_eq!(user.last_name.as_deref(), Some("Dupont"));
}

// ============================================
// Exercise repository
// ============================================

#[test]
fn test_get_exercises_on_empty_store_returns_empty_list() {
    let db = test_db();
    let repo = ExerciseRepository::new(db);

    assert!(repo.get_exercises().unwrap().is_empty());
}

#[test]
fn test_add_exercise_round_trips_field_values() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    let repo = ExerciseRepository::new(db);

    let date = Utc::now();
    repo.add_exercise("Football", 10, 5, date).unwrap();

    let exercises = repo.get_exercises().unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].category.as_deref(), Some("Football"));
    assert_eq!(exercises[0].duration_min, 10);
    assert_eq!(exercises[0].intensity, 5);
    assert_eq!(exercises[0].start_date, Some(date));
}

#[test]
fn test_get_exercises_returns_newest_first() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    let repo = ExerciseRepository::new(db);

    let date1 = Utc::now();
    let date2 = date1 - Duration::days(1);
    let date3 = date1 - Duration::days(2);

    // Inserted out of chronological order on purpose
    repo.add_exercise("Football", 10, 5, date1).unwrap();
    repo.add_exercise("Running", 120, 1, date3).unwrap();
    repo.add_exercise("Fitness", 30, 5, date2).unwrap();

    let exercises = repo.get_exercises().unwrap();
    assert_eq!(exercises.len(), 3);
    assert_eq!(exercises[0].category.as_deref(), Some("Football"));
    assert_eq!(exercises[1].category.as_deref(), Some("Fitness"));
    assert_eq!(exercises[2].category.as_deref(), Some("Running"));
}

#[test]
fn test_add_exercise_without_user_fails_and_persists_nothing() {
    let db = test_db();
    let repo = ExerciseRepository::new(db);

    let err = repo.add_exercise("Running", 30, 7, Utc::now()).unwrap_err();
    assert!(matches!(err, Error::NoOwner { .. }));

    assert_eq!(repo.get_exercises().unwrap().len(), 0);
}

#[test]
fn test_ordering_is_stable_across_rereads() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    let repo = ExerciseRepository::new(db);

    // Three records sharing one start date
    let date = Utc::now();
    repo.add_exercise("Football", 10, 5, date).unwrap();
    repo.add_exercise("Running", 120, 1, date).unwrap();
    repo.add_exercise("Fitness", 30, 5, date).unwrap();

    let first: Vec<i64> = repo.get_exercises().unwrap().iter().map(|e| e.id).collect();
    let second: Vec<i64> = repo.get_exercises().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(first, second);
}

// ============================================
// Sleep repository
// ============================================

#[test]
fn test_add_sleep_session_round_trips_field_values() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    let repo = SleepRepository::new(db);

    let now = Utc::now();
    repo.add_sleep_session(now, 480, 8).unwrap();

    let sessions = repo.get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration_min, 480);
    assert_eq!(sessions[0].quality, 8);
    assert_eq!(sessions[0].start_date, Some(now));
}

#[test]
fn test_get_sleep_sessions_returns_newest_first() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    let repo = SleepRepository::new(db);

    let date1 = Utc::now();
    let date2 = date1 - Duration::days(1);
    let date3 = date1 - Duration::days(2);

    repo.add_sleep_session(date2, 400, 3).unwrap();
    repo.add_sleep_session(date1, 480, 8).unwrap();
    repo.add_sleep_session(date3, 300, 5).unwrap();

    let sessions = repo.get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].start_date, Some(date1));
    assert_eq!(sessions[1].start_date, Some(date2));
    assert_eq!(sessions[2].start_date, Some(date3));
}

#[test]
fn test_add_sleep_session_without_user_fails_and_persists_nothing() {
    let db = test_db();
    let repo = SleepRepository::new(db);

    let err = repo.add_sleep_session(Utc::now(), 480, 8).unwrap_err();
    assert!(matches!(err, Error::NoOwner { .. }));

    assert_eq!(repo.get_sleep_sessions().unwrap().len(), 0);
}

// ============================================
// Default-data seeder
// ============================================

#[test]
fn test_seed_creates_user_and_sample_history() {
    let db = test_db();
    DefaultDataSeeder::new(Arc::clone(&db)).apply().unwrap();

    let user = UserRepository::new(Arc::clone(&db))
        .get_user()
        .unwrap()
        .expect("seeded user should exist");
    assert_eq!(user.first_name.as_deref(), Some("Johan"));
    assert_eq!(user.last_name.as_deref(), Some("Trino"));

    let sessions = SleepRepository::new(db).get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 5);
    for session in &sessions {
        assert!((0..=900).contains(&session.duration_min));
        assert!((0..=10).contains(&session.quality));
        assert_eq!(session.user_id, Some(user.id));
    }
}

#[test]
fn test_seed_is_idempotent() {
    let db = test_db();
    let seeder = DefaultDataSeeder::new(Arc::clone(&db));

    seeder.apply().unwrap();
    seeder.apply().unwrap();

    let user_count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
        .unwrap();
    assert_eq!(user_count, 1);

    let sessions = SleepRepository::new(db).get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 5);
}

#[test]
fn test_seed_default_offsets_date_forward() {
    let db = test_db();
    let before = Utc::now();
    DefaultDataSeeder::new(Arc::clone(&db)).apply().unwrap();

    let sessions = SleepRepository::new(db).get_sleep_sessions().unwrap();
    for session in &sessions {
        assert!(session.start_date.unwrap() > before);
    }
}

#[test]
fn test_seed_past_offset_produces_history() {
    let db = test_db();
    let options = SeedOptions {
        sleep_samples: 3,
        offset: OffsetDirection::Past,
    };
    DefaultDataSeeder::with_options(Arc::clone(&db), options)
        .apply()
        .unwrap();

    let after = Utc::now();
    let sessions = SleepRepository::new(db).get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 3);
    for session in &sessions {
        assert!(session.start_date.unwrap() < after);
    }
}

#[test]
fn test_seed_failure_leaves_no_partial_data() {
    let db = test_db();

    // Make the sleep insert fail mid-transaction
    db.connection()
        .execute_batch(
            "CREATE TRIGGER reject_sleep BEFORE INSERT ON sleep_sessions
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let result = DefaultDataSeeder::new(Arc::clone(&db)).apply();
    assert!(result.is_err());

    // The user insert rolled back with the rest of the seed
    assert!(UserRepository::new(db).get_user().unwrap().is_none());
}

#[test]
fn test_seed_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data.db");

    {
        let db = Arc::new(Database::open(&db_path).unwrap());
        db.migrate().unwrap();
        DefaultDataSeeder::new(db).apply().unwrap();
    }

    let db = Arc::new(Database::open(&db_path).unwrap());
    db.migrate().unwrap();

    // Re-seeding the reopened store is still a no-op
    DefaultDataSeeder::new(Arc::clone(&db)).apply().unwrap();

    let sessions = SleepRepository::new(Arc::clone(&db))
        .get_sleep_sessions()
        .unwrap();
    assert_eq!(sessions.len(), 5);
    assert!(UserRepository::new(db).get_user().unwrap().is_some());
}

// ============================================
// View-models
// ============================================

#[test]
fn test_exercise_list_fetches_eagerly() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");
    ExerciseRepository::new(Arc::clone(&db))
        .add_exercise("Football", 10, 5, Utc::now())
        .unwrap();

    let vm = ExerciseListViewModel::new(ExerciseRepository::new(db));
    assert_eq!(vm.exercises().len(), 1);
    assert_eq!(vm.exercises()[0].category.as_deref(), Some("Football"));
}

#[test]
fn test_exercise_list_reload_reflects_later_inserts() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");

    let mut vm = ExerciseListViewModel::new(ExerciseRepository::new(Arc::clone(&db)));
    assert!(vm.exercises().is_empty());

    // Written through a different repository instance; the view-model only
    // sees it after an explicit reload
    ExerciseRepository::new(db)
        .add_exercise("Running", 30, 7, Utc::now())
        .unwrap();
    assert!(vm.exercises().is_empty());

    vm.reload().unwrap();
    assert_eq!(vm.exercises().len(), 1);
}

#[test]
fn test_sleep_history_reload_reflects_later_inserts() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");

    let mut vm = SleepHistoryViewModel::new(SleepRepository::new(Arc::clone(&db)));
    assert!(vm.sleep_sessions().is_empty());

    SleepRepository::new(db)
        .add_sleep_session(Utc::now(), 480, 8)
        .unwrap();

    vm.reload().unwrap();
    assert_eq!(vm.sleep_sessions().len(), 1);
}

#[test]
fn test_add_sleep_session_view_model_writes_through() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");

    let mut vm = AddSleepSessionViewModel::new(SleepRepository::new(Arc::clone(&db)));
    vm.duration_min = 480;
    vm.quality = 8;
    vm.add_sleep_session().unwrap();

    let sessions = SleepRepository::new(db).get_sleep_sessions().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration_min, 480);
    assert_eq!(sessions[0].quality, 8);
    assert_eq!(sessions[0].start_date, Some(vm.start_time));
}

#[test]
fn test_user_data_view_model_snapshots_names() {
    let db = test_db();
    insert_user(&db, "Eric", "Dupont");

    let vm = UserDataViewModel::new(&UserRepository::new(db));
    assert_eq!(vm.first_name(), "Eric");
    assert_eq!(vm.last_name(), "Dupont");
}

#[test]
fn test_user_data_view_model_defaults_when_no_user() {
    let db = test_db();

    let vm = UserDataViewModel::new(&UserRepository::new(db));
    assert_eq!(vm.first_name(), "");
    assert_eq!(vm.last_name(), "");
}
