use chrono::NaiveDate;
use nutrilog_core::progress::{
    bmi, bmi_category, calorie_progress, days_on_target, days_with_entries, key_result_progress,
    macro_split, okr_progress, BmiCategory,
};
use nutrilog_core::{DaySummary, KeyResult};

fn summary(calories: f64) -> DaySummary {
    DaySummary {
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        calories,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        exercise_minutes: 0,
        water_intake_ml: 2000.0,
    }
}

#[test]
fn calorie_progress_is_a_clamped_ratio() {
    assert!((calorie_progress(500.0, 2000.0) - 0.25).abs() < 1e-9);
    assert_eq!(calorie_progress(2500.0, 2000.0), 1.0);
    assert_eq!(calorie_progress(2000.0, 2000.0), 1.0);
    assert_eq!(calorie_progress(-50.0, 2000.0), 0.0);
}

#[test]
fn calorie_progress_guards_degenerate_targets() {
    assert_eq!(calorie_progress(100.0, 0.0), 0.0);
    assert_eq!(calorie_progress(100.0, -500.0), 0.0);
    assert_eq!(calorie_progress(f64::NAN, 2000.0), 0.0);
}

#[test]
fn bmi_uses_meters_squared() {
    let value = bmi(165.0, 55.0);
    let expected = 55.0 / (1.65 * 1.65);
    assert!((value - expected).abs() < 1e-9);
}

#[test]
fn bmi_returns_zero_for_degenerate_inputs() {
    assert_eq!(bmi(0.0, 55.0), 0.0);
    assert_eq!(bmi(165.0, 0.0), 0.0);
    assert_eq!(bmi(-170.0, 60.0), 0.0);
    assert_eq!(bmi(f64::NAN, 60.0), 0.0);
}

#[test]
fn bmi_category_boundaries_are_half_open() {
    assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
    assert_eq!(bmi_category(18.5), BmiCategory::Normal);
    assert_eq!(bmi_category(23.99), BmiCategory::Normal);
    assert_eq!(bmi_category(24.0), BmiCategory::Overweight);
    assert_eq!(bmi_category(27.99), BmiCategory::Overweight);
    assert_eq!(bmi_category(28.0), BmiCategory::Obese);
}

#[test]
fn bmi_category_labels_are_stable() {
    assert_eq!(BmiCategory::Underweight.label(), "underweight");
    assert_eq!(BmiCategory::Normal.label(), "normal");
    assert_eq!(BmiCategory::Overweight.label(), "overweight");
    assert_eq!(BmiCategory::Obese.label(), "obese");
}

#[test]
fn key_result_progress_clamps_and_guards_target() {
    assert!((key_result_progress(5000.0, 10000.0) - 0.5).abs() < 1e-9);
    assert_eq!(key_result_progress(7.0, 5.0), 1.0);
    assert_eq!(key_result_progress(3.0, 0.0), 0.0);
    assert_eq!(key_result_progress(-2.0, 10.0), 0.0);
}

#[test]
fn okr_progress_is_the_mean_over_key_results() {
    assert_eq!(okr_progress(&[]), 0.0);

    let krs = vec![
        KeyResult::new("steps", 10000.0, 5000.0, "steps"),
        KeyResult::new("weight", 5.0, 5.0, "kg"),
    ];
    assert!((okr_progress(&krs) - 0.75).abs() < 1e-9);
}

#[test]
fn macro_split_shares_sum_to_one() {
    let split = macro_split(50.0, 100.0, 20.0);
    // 200 + 400 + 180 kcal.
    assert!((split.protein - 200.0 / 780.0).abs() < 1e-9);
    assert!((split.carbs - 400.0 / 780.0).abs() < 1e-9);
    assert!((split.fat - 180.0 / 780.0).abs() < 1e-9);
    assert!((split.protein + split.carbs + split.fat - 1.0).abs() < 1e-9);
}

#[test]
fn macro_split_is_all_zero_without_macros() {
    let split = macro_split(0.0, 0.0, 0.0);
    assert_eq!(split.protein, 0.0);
    assert_eq!(split.carbs, 0.0);
    assert_eq!(split.fat, 0.0);

    let negative = macro_split(-5.0, -1.0, -2.0);
    assert_eq!(negative.protein, 0.0);
}

#[test]
fn days_on_target_uses_inclusive_200_kcal_tolerance() {
    let days = vec![
        summary(1800.0),
        summary(1799.9),
        summary(2000.0),
        summary(2200.0),
        summary(2200.1),
    ];
    assert_eq!(days_on_target(&days, 2000.0), 3);
}

#[test]
fn days_with_entries_requires_positive_calories() {
    let days = vec![summary(0.0), summary(120.0), summary(0.0), summary(1.0)];
    assert_eq!(days_with_entries(&days), 2);
}
