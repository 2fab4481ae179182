use chrono::NaiveDate;
use nutrilog_core::{
    ExerciseEntry, ExerciseKind, FoodEntry, Gender, HealthSnapshot, KeyResult, MealSlot,
    MoodEntry, MoodKind, NutritionFacts, Okr, RecordMethod, Subscription, SubscriptionTier,
    UserProfile,
};

#[test]
fn food_entry_new_sets_defaults() {
    let entry = FoodEntry::new(
        "apple",
        NutritionFacts::new(52.0, 0.3, 14.0, 0.2),
        RecordMethod::ManualEntry,
    );

    assert!(!entry.id.is_nil());
    assert_eq!(entry.name, "apple");
    assert_eq!(entry.emoji, "🍽️");
    assert_eq!(entry.weight_grams, 100.0);
    assert_eq!(entry.portion, "1 serving");
    assert_eq!(entry.quantity, 100.0);
    assert_eq!(entry.unit, "g");
    assert_eq!(entry.meal_slot, MealSlot::Breakfast);
    assert_eq!(entry.confidence, 1.0);
    assert_eq!(entry.barcode, None);
    assert_eq!(entry.mood_note, None);
}

#[test]
fn nutrition_constructor_saturates_negative_fields() {
    let facts = NutritionFacts::new(-10.0, 5.0, -1.0, 2.0);
    assert_eq!(facts.calories, 0.0);
    assert_eq!(facts.protein, 5.0);
    assert_eq!(facts.carbs, 0.0);
    assert_eq!(facts.fat, 2.0);
}

#[test]
fn total_nutrition_scales_linearly_with_quantity() {
    let mut entry = FoodEntry::new(
        "rice",
        NutritionFacts::new(130.0, 2.7, 28.0, 0.3),
        RecordMethod::ManualEntry,
    );
    entry.quantity = 150.0;

    let total = entry.total_nutrition();
    assert!((total.calories - 195.0).abs() < 1e-9);
    assert!((total.protein - 4.05).abs() < 1e-9);
    assert!((total.carbs - 42.0).abs() < 1e-9);
    assert!((total.fat - 0.45).abs() < 1e-9);
}

#[test]
fn set_confidence_clamps_and_rejects_non_finite() {
    let mut entry = FoodEntry::new(
        "apple",
        NutritionFacts::new(52.0, 0.3, 14.0, 0.2),
        RecordMethod::PhotoRecognition,
    );

    entry.set_confidence(1.5);
    assert_eq!(entry.confidence, 1.0);

    entry.set_confidence(-0.2);
    assert_eq!(entry.confidence, 0.0);

    entry.set_confidence(f64::NAN);
    assert_eq!(entry.confidence, 0.0);

    entry.set_confidence(0.83);
    assert_eq!(entry.confidence, 0.83);
}

#[test]
fn record_method_serializes_with_compact_wire_names() {
    assert_eq!(
        serde_json::to_value(RecordMethod::PhotoRecognition).unwrap(),
        serde_json::json!("photo")
    );
    assert_eq!(
        serde_json::to_value(RecordMethod::AlbumSelection).unwrap(),
        serde_json::json!("album")
    );
    assert_eq!(
        serde_json::to_value(RecordMethod::BarcodeScan).unwrap(),
        serde_json::json!("barcode")
    );
    assert_eq!(
        serde_json::to_value(RecordMethod::ManualEntry).unwrap(),
        serde_json::json!("manual")
    );
}

#[test]
fn food_entry_serialization_round_trips() {
    let mut entry = FoodEntry::new(
        "salmon",
        NutritionFacts::new(208.0, 22.0, 0.0, 12.0),
        RecordMethod::BarcodeScan,
    );
    entry.barcode = Some("4901234567894".to_string());
    entry.meal_slot = MealSlot::Dinner;
    entry.tags = vec!["dinner".to_string(), "fish".to_string()];

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["name"], "salmon");
    assert_eq!(json["record_method"], "barcode");
    assert_eq!(json["meal_slot"], "dinner");
    assert_eq!(json["barcode"], "4901234567894");

    let decoded: FoodEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn meal_slot_and_mood_emojis_are_stable() {
    assert_eq!(MealSlot::Breakfast.emoji(), "🌅");
    assert_eq!(MealSlot::Lunch.emoji(), "☀️");
    assert_eq!(MealSlot::Dinner.emoji(), "🌙");
    assert_eq!(MealSlot::Snack.emoji(), "🍿");

    assert_eq!(MoodKind::Happy.emoji(), "😊");
    assert_eq!(MoodKind::Anxious.emoji(), "😰");
    assert_eq!(MoodKind::Stressed.emoji(), "😤");
}

#[test]
fn exercise_entry_saturates_negative_inputs() {
    let entry = ExerciseEntry::new("run", ExerciseKind::Cardio, -30, -12.0);
    assert_eq!(entry.duration_secs, 0);
    assert_eq!(entry.calories_burned, 0.0);
}

#[test]
fn mood_intensity_is_clamped_into_band() {
    assert_eq!(MoodEntry::new(MoodKind::Happy, 0, "flat").intensity, 1);
    assert_eq!(MoodEntry::new(MoodKind::Happy, 3, "fine").intensity, 3);
    assert_eq!(MoodEntry::new(MoodKind::Excited, 9, "big day").intensity, 5);
}

#[test]
fn subscription_end_date_follows_tier_duration() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    let monthly = Subscription::starting_on(SubscriptionTier::Monthly, start, 9.9);
    assert_eq!(monthly.end_date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    assert!(monthly.is_active);

    let half_year = Subscription::starting_on(SubscriptionTier::HalfYearly, start, 49.9);
    assert_eq!(
        half_year.end_date,
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    );

    let yearly = Subscription::starting_on(SubscriptionTier::Yearly, start, 89.9);
    assert_eq!(yearly.end_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
}

#[test]
fn subscription_month_arithmetic_clamps_to_month_end() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let monthly = Subscription::starting_on(SubscriptionTier::Monthly, start, 9.9);
    assert_eq!(monthly.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn key_result_progress_is_derived_not_stored() {
    let kr = KeyResult::new("steps", 10000.0, 5000.0, "steps");
    assert!((kr.progress() - 0.5).abs() < 1e-9);

    let done = KeyResult::new("weight", 5.0, 7.0, "kg");
    assert_eq!(done.progress(), 1.0);

    let unset = KeyResult::new("invalid", 0.0, 3.0, "kg");
    assert_eq!(unset.progress(), 0.0);
}

#[test]
fn okr_progress_averages_key_results() {
    let mut okr = Okr::new("health", "2024 Q1");
    assert_eq!(okr.progress(), 0.0);

    okr.key_results = vec![
        KeyResult::new("steps", 10000.0, 5000.0, "steps"),
        KeyResult::new("weight", 5.0, 5.0, "kg"),
    ];
    assert!((okr.progress() - 0.75).abs() < 1e-9);
}

#[test]
fn health_snapshot_bmi_matches_profile_formula() {
    let snapshot = HealthSnapshot::new(55.0, 165.0);
    let expected = 55.0 / (1.65 * 1.65);
    assert!((snapshot.bmi() - expected).abs() < 1e-9);
}

#[test]
fn profile_age_counts_completed_years() {
    let birthday = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
    let profile = UserProfile::new("tester", Gender::Other, birthday, 170.0, 60.0);

    let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(profile.age_on(before), 23);
    assert_eq!(profile.age_on(on), 24);

    let earlier = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
    assert_eq!(profile.age_on(earlier), 0);
}
