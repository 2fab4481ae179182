use std::path::Path;
use std::sync::Arc;

use chrono::{Duration, Utc};
use nutrilog_core::db::{open_db, open_db_in_memory, DbError};
use nutrilog_core::repo::snapshot_repo::{load_collection, KEY_EXERCISE_ENTRIES, KEY_FOOD_ENTRIES};
use nutrilog_core::{
    ExerciseEntry, ExerciseKind, FoodEntry, Gender, MealSlot, MoodEntry, MoodKind,
    NutritionFacts, RecordMethod, RepoError, RepoResult, SnapshotRepository,
    SqliteSnapshotRepository, TrackerService, UserProfile, WeightEntry,
};

fn sqlite_store(path: &Path) -> TrackerService {
    let conn = open_db(path).unwrap();
    TrackerService::new(Arc::new(SqliteSnapshotRepository::new(conn)))
}

#[test]
fn collections_survive_a_store_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracker.db");

    let mut entry = FoodEntry::new(
        "salmon",
        NutritionFacts::new(208.0, 22.0, 0.0, 12.0),
        RecordMethod::BarcodeScan,
    );
    entry.barcode = Some("4901234567894".to_string());
    entry.meal_slot = MealSlot::Dinner;
    entry.tags = vec!["dinner".to_string()];

    let run = ExerciseEntry::new("run", ExerciseKind::Cardio, 1800, 250.0);
    let mut mood = MoodEntry::new(MoodKind::Happy, 4, "good food day");
    mood.triggers = vec!["dinner".to_string(), "walk".to_string()];
    let weight = WeightEntry::new(70.5);

    {
        let mut store = sqlite_store(&db_path);
        store.add_food(entry.clone());
        store.add_exercise(run.clone());
        store.add_mood(mood.clone());
        store.add_weight(weight.clone());
        store.flush_persistence();
    }

    let store = sqlite_store(&db_path);
    assert_eq!(store.food_entries(), &[entry]);
    assert_eq!(store.exercise_entries(), &[run]);
    assert_eq!(store.mood_entries(), &[mood]);
    assert_eq!(store.weight_entries(), &[weight]);
    assert_eq!(store.current_weight_kg(), 70.5);
}

#[test]
fn reopen_restores_newest_first_order() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracker.db");

    let mut old = FoodEntry::new(
        "toast",
        NutritionFacts::new(120.0, 4.0, 20.0, 2.0),
        RecordMethod::ManualEntry,
    );
    old.timestamp = Utc::now() - Duration::hours(5);
    let recent = FoodEntry::new(
        "apple",
        NutritionFacts::new(52.0, 0.3, 14.0, 0.2),
        RecordMethod::ManualEntry,
    );

    {
        let mut store = sqlite_store(&db_path);
        store.add_food(old.clone());
        store.add_food(recent.clone());
    }

    let store = sqlite_store(&db_path);
    assert_eq!(store.food_entries().len(), 2);
    assert_eq!(store.food_entries()[0].id, recent.id);
    assert_eq!(store.food_entries()[1].id, old.id);
}

#[test]
fn flush_makes_writes_visible_to_a_second_connection() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracker.db");

    let mut store = sqlite_store(&db_path);
    store.add_food(FoodEntry::new(
        "yogurt",
        NutritionFacts::new(59.0, 10.0, 3.6, 0.4),
        RecordMethod::ManualEntry,
    ));
    store.flush_persistence();

    let reader = SqliteSnapshotRepository::new(open_db(&db_path).unwrap());
    let loaded: Vec<FoodEntry> = load_collection(&reader, KEY_FOOD_ENTRIES);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "yogurt");
}

#[test]
fn stored_profile_wins_over_seed_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracker.db");

    {
        let mut store = sqlite_store(&db_path);
        let birthday = store.profile().birthday;
        store.update_profile(UserProfile::new(
            "night owl",
            Gender::Other,
            birthday,
            172.0,
            63.0,
        ));
        store.flush_persistence();
    }

    let store = sqlite_store(&db_path);
    assert_eq!(store.profile().nickname, "night owl");
    assert_eq!(store.profile().height_cm, 172.0);
    assert_eq!(store.health().height_cm, 172.0);
}

#[test]
fn goal_update_preserves_identity_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracker.db");

    let goal_id = {
        let mut store = sqlite_store(&db_path);
        let goal_id = store.goals()[0].id;
        store.update_goal_progress(goal_id, 52.0);
        store.flush_persistence();
        goal_id
    };

    let store = sqlite_store(&db_path);
    assert_eq!(store.goals().len(), 3);
    let updated = store.goals().iter().find(|g| g.id == goal_id).unwrap();
    assert_eq!(updated.current_value, 52.0);
    assert!(updated.is_active);
}

#[test]
fn corrupt_snapshot_falls_back_to_default_and_spares_other_keys() {
    let repo = SqliteSnapshotRepository::new(open_db_in_memory().unwrap());

    let run = ExerciseEntry::new("row", ExerciseKind::Cardio, 1200, 180.0);
    let valid = serde_json::to_vec(&vec![run.clone()]).unwrap();
    repo.save_blob(KEY_EXERCISE_ENTRIES, &valid).unwrap();
    repo.save_blob(KEY_FOOD_ENTRIES, b"{ not json").unwrap();

    let store = TrackerService::new(Arc::new(repo));
    assert!(store.food_entries().is_empty());
    assert_eq!(store.exercise_entries(), &[run]);
}

struct FailingSnapshotRepository;

impl SnapshotRepository for FailingSnapshotRepository {
    fn save_blob(&self, _key: &str, _payload: &[u8]) -> RepoResult<()> {
        Err(RepoError::Db(DbError::UnsupportedSchemaVersion {
            db_version: 99,
            latest_supported: 1,
        }))
    }

    fn load_blob(&self, _key: &str) -> RepoResult<Option<Vec<u8>>> {
        Ok(None)
    }
}

#[test]
fn write_failures_never_disturb_in_memory_state() {
    let mut store = TrackerService::new(Arc::new(FailingSnapshotRepository));

    store.add_food(FoodEntry::new(
        "bread",
        NutritionFacts::new(265.0, 9.0, 49.0, 3.2),
        RecordMethod::ManualEntry,
    ));
    store.add_weight(WeightEntry::new(64.0));
    store.flush_persistence();

    assert_eq!(store.food_entries().len(), 1);
    assert_eq!(store.current_weight_kg(), 64.0);
    assert!((store.today_calories() - 265.0).abs() < 1e-9);
}
