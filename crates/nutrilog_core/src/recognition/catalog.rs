//! Built-in food knowledge tables.
//!
//! # Responsibility
//! - Map recognizable food names to per-100 g nutrition facts.
//! - Provide display emoji, per-goal recommendations and intake suggestions.
//!
//! # Invariants
//! - Name lookup is case-insensitive.
//! - Emoji rules are ordered; the first keyword contained in the name wins.

use once_cell::sync::Lazy;

use crate::model::food::FoodEntry;
use crate::model::goal::GoalKind;
use crate::model::nutrition::NutritionFacts;
use crate::model::summary::NutritionSummary;

/// Shown when no emoji rule matches a food name.
pub const DEFAULT_FOOD_EMOJI: &str = "🍽️";

/// Suggest lighter foods above this daily calorie intake for weight loss.
const HIGH_CALORIE_THRESHOLD_KCAL: f64 = 500.0;
/// Suggest denser foods below this daily calorie intake for weight gain.
const LOW_CALORIE_THRESHOLD_KCAL: f64 = 800.0;
/// Suggest protein sources below this daily protein intake for muscle building.
const LOW_PROTEIN_THRESHOLD_G: f64 = 50.0;

static FOOD_CATALOG: Lazy<Vec<(&'static str, NutritionFacts)>> = Lazy::new(|| {
    vec![
        ("apple", NutritionFacts::new(52.0, 0.3, 14.0, 0.2)),
        ("banana", NutritionFacts::new(89.0, 1.1, 23.0, 0.3)),
        ("orange", NutritionFacts::new(43.0, 0.9, 11.0, 0.1)),
        ("rice", NutritionFacts::new(130.0, 2.7, 28.0, 0.3)),
        ("chicken", NutritionFacts::new(239.0, 27.0, 0.0, 14.0)),
        ("beef", NutritionFacts::new(250.0, 26.0, 0.0, 15.0)),
        ("fish", NutritionFacts::new(206.0, 22.0, 0.0, 12.0)),
        ("egg", NutritionFacts::new(155.0, 13.0, 1.1, 11.0)),
        ("milk", NutritionFacts::new(42.0, 3.4, 5.0, 1.0)),
        ("bread", NutritionFacts::new(265.0, 9.0, 49.0, 3.2)),
        ("pasta", NutritionFacts::new(220.0, 8.0, 44.0, 1.1)),
        ("tomato", NutritionFacts::new(18.0, 0.9, 3.9, 0.2)),
        ("lettuce", NutritionFacts::new(15.0, 1.4, 2.9, 0.2)),
        ("carrot", NutritionFacts::new(41.0, 0.9, 10.0, 0.2)),
        ("potato", NutritionFacts::new(77.0, 2.0, 17.0, 0.1)),
        ("cheese", NutritionFacts::new(402.0, 25.0, 1.3, 33.0)),
        ("yogurt", NutritionFacts::new(59.0, 10.0, 3.6, 0.4)),
        ("salmon", NutritionFacts::new(208.0, 22.0, 0.0, 12.0)),
        ("broccoli", NutritionFacts::new(34.0, 2.8, 7.0, 0.4)),
        ("spinach", NutritionFacts::new(23.0, 2.9, 3.6, 0.4)),
    ]
});

/// Ordered keyword rules; first match wins so compound names like
/// "chicken salad" resolve to the leading ingredient.
const EMOJI_RULES: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("rice", "🍚"),
    ("chicken", "🍗"),
    ("beef", "🥩"),
    ("salmon", "🐟"),
    ("fish", "🐟"),
    ("egg", "🥚"),
    ("yogurt", "🥛"),
    ("milk", "🥛"),
    ("bread", "🍞"),
    ("pasta", "🍝"),
    ("tomato", "🍅"),
    ("lettuce", "🥬"),
    ("spinach", "🥬"),
    ("carrot", "🥕"),
    ("potato", "🥔"),
    ("cheese", "🧀"),
    ("broccoli", "🥦"),
];

/// All recognizable foods with their per-100 g nutrition facts.
pub fn catalog() -> &'static [(&'static str, NutritionFacts)] {
    &FOOD_CATALOG
}

/// Per-100 g facts for a known food name, matched case-insensitively.
pub fn nutrition_for(name: &str) -> Option<NutritionFacts> {
    let lower = name.to_lowercase();
    FOOD_CATALOG
        .iter()
        .find(|(known, _)| *known == lower)
        .map(|(_, facts)| *facts)
}

/// Display emoji for a food name, falling back to [`DEFAULT_FOOD_EMOJI`].
pub fn emoji_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    EMOJI_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_FOOD_EMOJI)
}

/// Catalog foods suited to a goal kind.
pub fn recommended_foods(kind: GoalKind) -> &'static [&'static str] {
    match kind {
        GoalKind::WeightLoss | GoalKind::FatLoss => {
            &["apple", "lettuce", "tomato", "broccoli", "spinach"]
        }
        GoalKind::WeightGain => &["banana", "rice", "chicken", "beef", "cheese"],
        GoalKind::Maintenance | GoalKind::Fitness => &["fish", "egg", "milk", "yogurt", "carrot"],
        GoalKind::MuscleBuild => &["chicken", "beef", "salmon", "egg", "milk"],
    }
}

/// Sums quantity-scaled nutrition over a set of entries.
pub fn nutrition_summary(entries: &[FoodEntry]) -> NutritionSummary {
    let mut summary = NutritionSummary::default();
    for entry in entries {
        let total = entry.total_nutrition();
        summary.calories += total.calories;
        summary.protein += total.protein;
        summary.carbs += total.carbs;
        summary.fat += total.fat;
    }
    summary
}

/// Intake advice for a goal kind given the entries logged so far today.
pub fn food_suggestions(entries: &[FoodEntry], kind: GoalKind) -> Vec<String> {
    let summary = nutrition_summary(entries);
    let mut suggestions = Vec::new();
    match kind {
        GoalKind::WeightLoss => {
            if summary.calories > HIGH_CALORIE_THRESHOLD_KCAL {
                suggestions.push(
                    "Calorie intake is already high today; go for low-calorie foods.".to_string(),
                );
            }
            suggestions.push("Recommended: vegetable salad or fresh fruit.".to_string());
        }
        GoalKind::WeightGain => {
            if summary.calories < LOW_CALORIE_THRESHOLD_KCAL {
                suggestions.push(
                    "Calorie intake is on the low side; add some energy-dense foods.".to_string(),
                );
            }
            suggestions.push("Recommended: nuts, milk or meat.".to_string());
        }
        GoalKind::Maintenance => {
            suggestions.push("Keep meals balanced across the nutrient groups.".to_string());
        }
        GoalKind::MuscleBuild => {
            if summary.protein < LOW_PROTEIN_THRESHOLD_G {
                suggestions.push("Protein intake is low; add a protein-rich food.".to_string());
            }
            suggestions.push("Recommended: chicken breast, fish or eggs.".to_string());
        }
        GoalKind::FatLoss => {
            suggestions.push("Recommended: low-fat, high-protein foods.".to_string());
        }
        GoalKind::Fitness => {
            suggestions.push("Balance your meals and keep up regular exercise.".to_string());
        }
    }
    suggestions
}
