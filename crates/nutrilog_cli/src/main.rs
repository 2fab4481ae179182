//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nutrilog_core` linkage.
//! - Walk the tracking flow end to end against an in-memory store.

use std::sync::Arc;
use std::time::Duration;

use nutrilog_core::recognition::catalog;
use nutrilog_core::{
    CaptureSource, ExerciseEntry, ExerciseKind, FoodBuddy, FoodEntry, MemorySnapshotRepository,
    MockRecognitionProvider, MoodEntry, MoodKind, RecognitionProvider, RecordMethod,
    TrackerService, WeightEntry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("nutrilog_core ping={}", nutrilog_core::ping());
    println!("nutrilog_core version={}", nutrilog_core::core_version());

    let mut store = TrackerService::new(Arc::new(MemorySnapshotRepository::new()));
    seed_demo_day(&mut store);

    // Seeded and latency-free so repeated runs print the same draws.
    let provider = MockRecognitionProvider::new()
        .with_latency(Duration::ZERO)
        .with_seed(7);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let image = vec![0u8; 64];
    let recognized = runtime.block_on(provider.identify(&image, CaptureSource::Camera))?;
    for entry in recognized {
        println!(
            "recognized {} {} ({:.0} kcal/100g, confidence {:.2})",
            entry.emoji, entry.name, entry.nutrition.calories, entry.confidence
        );
        store.add_food(entry);
    }

    println!(
        "today calories={:.0} protein={:.1}g",
        store.today_calories(),
        store.today_protein()
    );
    println!(
        "calorie progress={:.2} target={:.0}",
        store.calorie_progress(),
        store.daily_calorie_target()
    );
    println!(
        "bmi={:.1} category={}",
        store.bmi(),
        store.bmi_category().label()
    );
    println!("streak days={}", store.logging_streak_days());
    for suggestion in catalog::food_suggestions(store.today_food(), store.primary_goal_kind()) {
        println!("tip: {suggestion}");
    }

    Ok(())
}

fn seed_demo_day(store: &mut TrackerService) {
    for name in ["apple", "rice", "chicken"] {
        if let Some(facts) = catalog::nutrition_for(name) {
            let mut entry = FoodEntry::new(name, facts, RecordMethod::ManualEntry);
            entry.emoji = catalog::emoji_for(name).to_string();
            store.add_food(entry);
        }
    }
    store.add_exercise(ExerciseEntry::new(
        "morning run",
        ExerciseKind::Cardio,
        1800,
        250.0,
    ));
    store.add_mood(MoodEntry::new(MoodKind::Happy, 4, "slept well"));
    store.add_weight(WeightEntry::new(54.6));
    store.add_buddy(FoodBuddy::new("meal_prep_mia", "weekly prep ideas"));
    store.add_buddy(FoodBuddy::new("trail_tom", "runs and recipes"));
    println!(
        "seeded demo day: {} foods, {} buddies",
        store.today_food().len(),
        store.buddies().len()
    );
}
