//! Tracking store for food, exercise, mood and weight.
//!
//! # Responsibility
//! - Hold every tracked collection in memory, newest entry first.
//! - Keep the today views and health snapshot consistent after each mutation.
//! - Enqueue the touched collection for write-behind persistence.
//!
//! # Invariants
//! - Today views always equal a fresh recomputation over the full collections.
//! - Date filtering uses the local calendar day of each entry timestamp.
//! - Daily aggregates sum per-100g base nutrition; scaling stays a summary concern.
//! - Only the six persisted collections are ever enqueued; session state never is.

use std::sync::Arc;

use chrono::{DateTime, Days, Local, Months, NaiveDate, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::model::activity::{ExerciseEntry, MoodEntry, WeightEntry};
use crate::model::food::FoodEntry;
use crate::model::goal::{DietPlan, Goal, GoalKind, KeyResult, Okr};
use crate::model::profile::{Gender, HealthSnapshot, UserProfile};
use crate::model::social::{FoodBuddy, FoodPost};
use crate::model::subscription::{Subscription, SubscriptionTier};
use crate::model::summary::DaySummary;
use crate::progress::{self, BmiCategory};
use crate::repo::snapshot_repo::{
    load_collection, SnapshotRepository, KEY_EXERCISE_ENTRIES, KEY_FOOD_ENTRIES, KEY_GOALS,
    KEY_MOOD_ENTRIES, KEY_USER_PROFILE, KEY_WEIGHT_ENTRIES,
};
use crate::repo::write_behind::SnapshotWriter;

/// Water intake is not tracked yet; day summaries carry this fixed value.
pub const WATER_INTAKE_PLACEHOLDER_ML: f64 = 2000.0;

/// Default daily calorie target until the user picks one.
pub const DEFAULT_DAILY_CALORIE_TARGET_KCAL: f64 = 2000.0;

/// In-memory tracking store plus derived views.
///
/// One instance owns all domain state. Mutations go through `&mut self`
/// methods which keep the today caches current and hand the touched
/// collection to the write-behind persistence worker.
pub struct TrackerService {
    writer: SnapshotWriter,

    food_entries: Vec<FoodEntry>,
    exercise_entries: Vec<ExerciseEntry>,
    mood_entries: Vec<MoodEntry>,
    weight_entries: Vec<WeightEntry>,

    today_food: Vec<FoodEntry>,
    today_exercises: Vec<ExerciseEntry>,
    today_mood: Option<MoodEntry>,

    profile: UserProfile,
    health: HealthSnapshot,
    current_weight_kg: f64,

    goals: Vec<Goal>,
    okr: Okr,

    active_plan: Option<DietPlan>,
    daily_calorie_target_kcal: f64,

    subscription: Option<Subscription>,

    buddies: Vec<FoodBuddy>,
    posts: Vec<FoodPost>,
}

impl TrackerService {
    /// Builds a store backed by the given snapshot repository.
    ///
    /// # Contract
    /// - Loads the six persisted collections; a missing or unreadable blob
    ///   falls back to its empty/default value without failing startup.
    /// - Seeds a default profile and goal set when storage holds none.
    /// - Spawns the write-behind worker; it is joined on drop.
    pub fn new(repo: Arc<dyn SnapshotRepository>) -> Self {
        let food_entries: Vec<FoodEntry> = load_collection(repo.as_ref(), KEY_FOOD_ENTRIES);
        let exercise_entries: Vec<ExerciseEntry> =
            load_collection(repo.as_ref(), KEY_EXERCISE_ENTRIES);
        let mood_entries: Vec<MoodEntry> = load_collection(repo.as_ref(), KEY_MOOD_ENTRIES);
        let weight_entries: Vec<WeightEntry> = load_collection(repo.as_ref(), KEY_WEIGHT_ENTRIES);
        let stored_profile: Option<UserProfile> = load_collection(repo.as_ref(), KEY_USER_PROFILE);
        let mut goals: Vec<Goal> = load_collection(repo.as_ref(), KEY_GOALS);

        let seeded = stored_profile.is_none();
        let profile = stored_profile.unwrap_or_else(default_profile);
        if goals.is_empty() {
            goals = default_goals();
        }

        // Latest recorded weight wins over the profile baseline.
        let current_weight_kg = weight_entries
            .first()
            .map(|entry| entry.weight_kg)
            .unwrap_or(profile.weight_kg);
        let health = HealthSnapshot::new(current_weight_kg, profile.height_cm);

        info!(
            "event=store_load module=tracker status=ok food={} exercise={} mood={} weight={} seeded={}",
            food_entries.len(),
            exercise_entries.len(),
            mood_entries.len(),
            weight_entries.len(),
            seeded
        );

        let mut store = Self {
            writer: SnapshotWriter::spawn(repo),
            food_entries,
            exercise_entries,
            mood_entries,
            weight_entries,
            today_food: Vec::new(),
            today_exercises: Vec::new(),
            today_mood: None,
            profile,
            health,
            current_weight_kg,
            goals,
            okr: default_okr(),
            active_plan: None,
            daily_calorie_target_kcal: DEFAULT_DAILY_CALORIE_TARGET_KCAL,
            subscription: None,
            buddies: Vec::new(),
            posts: Vec::new(),
        };
        store.refresh_today_food();
        store.refresh_today_exercises();
        store.refresh_today_mood();
        store
    }

    // ---- food log ----

    /// Prepends a food entry and persists the food collection.
    pub fn add_food(&mut self, entry: FoodEntry) {
        self.food_entries.insert(0, entry);
        self.refresh_today_food();
        self.persist_food();
    }

    /// Replaces the entry with the same ID; unknown IDs are ignored.
    pub fn update_food(&mut self, entry: FoodEntry) {
        match self.food_entries.iter().position(|e| e.id == entry.id) {
            Some(index) => {
                self.food_entries[index] = entry;
                self.refresh_today_food();
                self.persist_food();
            }
            None => {
                debug!(
                    "event=food_update module=tracker status=not_found id={}",
                    entry.id
                );
            }
        }
    }

    /// Removes a food entry by ID. Removing an absent ID is a no-op.
    pub fn remove_food(&mut self, id: Uuid) {
        self.food_entries.retain(|e| e.id != id);
        self.refresh_today_food();
        self.persist_food();
    }

    // ---- exercise log ----

    /// Prepends an exercise entry and persists the exercise collection.
    pub fn add_exercise(&mut self, entry: ExerciseEntry) {
        self.exercise_entries.insert(0, entry);
        self.refresh_today_exercises();
        self.persist_exercises();
    }

    /// Removes an exercise entry by ID. Removing an absent ID is a no-op.
    pub fn remove_exercise(&mut self, id: Uuid) {
        self.exercise_entries.retain(|e| e.id != id);
        self.refresh_today_exercises();
        self.persist_exercises();
    }

    // ---- mood diary ----

    /// Prepends a mood entry and persists the mood collection.
    ///
    /// The today-mood pointer follows the newest entry dated today.
    pub fn add_mood(&mut self, entry: MoodEntry) {
        self.mood_entries.insert(0, entry);
        self.refresh_today_mood();
        self.persist_moods();
    }

    // ---- weight log ----

    /// Prepends a weight entry and cascades it into the health snapshot.
    ///
    /// # Contract
    /// - Non-positive weights are skipped with a warning; state is untouched.
    /// - Accepted weights update `current_weight_kg` and the health snapshot.
    pub fn add_weight(&mut self, entry: WeightEntry) {
        if !entry.weight_kg.is_finite() || entry.weight_kg <= 0.0 {
            warn!(
                "event=weight_record module=tracker status=skipped weight={}",
                entry.weight_kg
            );
            return;
        }
        self.current_weight_kg = entry.weight_kg;
        self.health.weight_kg = entry.weight_kg;
        self.weight_entries.insert(0, entry);
        self.persist_weights();
    }

    // ---- profile and health ----

    /// Replaces the user profile and cascades height/weight into the snapshot.
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.health.height_cm = profile.height_cm;
        self.health.weight_kg = profile.weight_kg;
        self.profile = profile;
        self.persist_profile();
    }

    /// Overwrites the step count reported by a device sensor. Session state.
    pub fn set_step_count(&mut self, steps: u32) {
        self.health.steps = steps;
    }

    /// Overwrites the current weight from a device sensor reading.
    ///
    /// No weight entry is appended and nothing is persisted; the reading
    /// only refreshes the live snapshot.
    pub fn set_sensor_weight(&mut self, weight_kg: f64) {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            warn!(
                "event=sensor_weight module=tracker status=skipped weight={}",
                weight_kg
            );
            return;
        }
        self.current_weight_kg = weight_kg;
        self.health.weight_kg = weight_kg;
    }

    // ---- goals, OKR and plans ----

    /// Sets a goal's current value in place, preserving its ID.
    ///
    /// Unknown goal IDs are ignored.
    pub fn update_goal_progress(&mut self, goal_id: Uuid, current_value: f64) {
        match self.goals.iter_mut().find(|g| g.id == goal_id) {
            Some(goal) => {
                goal.current_value = current_value;
                self.persist_goals();
            }
            None => {
                debug!(
                    "event=goal_update module=tracker status=not_found id={}",
                    goal_id
                );
            }
        }
    }

    /// Sets the current value of one key result. Session state.
    pub fn set_key_result_progress(&mut self, index: usize, current: f64) {
        if let Some(kr) = self.okr.key_results.get_mut(index) {
            kr.current = current;
        }
    }

    /// Activates a diet plan and adopts its daily calorie budget.
    pub fn activate_plan(&mut self, plan: DietPlan) {
        self.daily_calorie_target_kcal = plan.daily_calories;
        self.active_plan = Some(DietPlan {
            is_active: true,
            ..plan
        });
    }

    /// Sets the daily calorie target. Non-positive targets are skipped.
    pub fn set_daily_calorie_target(&mut self, kcal: f64) {
        if !kcal.is_finite() || kcal <= 0.0 {
            warn!(
                "event=calorie_target module=tracker status=skipped kcal={}",
                kcal
            );
            return;
        }
        self.daily_calorie_target_kcal = kcal;
    }

    // ---- membership ----

    /// Starts a subscription of the given tier today. Session state.
    pub fn purchase_subscription(&mut self, tier: SubscriptionTier, price: f64) {
        self.subscription = Some(Subscription::new(tier, price));
    }

    // ---- social ----

    /// Adds a food buddy to the local list. Session state.
    pub fn add_buddy(&mut self, buddy: FoodBuddy) {
        self.buddies.push(buddy);
    }

    /// Toggles the following flag on a buddy. Unknown IDs are ignored.
    pub fn follow_buddy(&mut self, buddy_id: Uuid) {
        if let Some(buddy) = self.buddies.iter_mut().find(|b| b.id == buddy_id) {
            buddy.is_following = !buddy.is_following;
        }
    }

    /// Creates a post authored by the current profile and prepends it.
    pub fn create_post(
        &mut self,
        content: impl Into<String>,
        images: Vec<String>,
        food_entries: Vec<FoodEntry>,
    ) -> Uuid {
        let mut post = FoodPost::new(self.profile.id, content);
        post.images = images;
        post.food_entries = food_entries;
        let id = post.id;
        self.posts.insert(0, post);
        id
    }

    /// Shares one food entry as a post, appending hashtags to the caption.
    pub fn share_food(&mut self, entry: FoodEntry, caption: &str, hashtags: &[String]) -> Uuid {
        let mut content = caption.to_string();
        for tag in hashtags {
            content.push_str(" #");
            content.push_str(tag);
        }
        self.create_post(content, Vec::new(), vec![entry])
    }

    /// Toggles the like flag on a post, adjusting the counter.
    ///
    /// Unliking saturates at zero. Unknown IDs are ignored.
    pub fn like_post(&mut self, post_id: Uuid) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            if post.is_liked {
                post.is_liked = false;
                post.likes_count = post.likes_count.saturating_sub(1);
            } else {
                post.is_liked = true;
                post.likes_count += 1;
            }
        }
    }

    // ---- collection views ----

    /// All food entries, newest first.
    pub fn food_entries(&self) -> &[FoodEntry] {
        &self.food_entries
    }

    /// All exercise entries, newest first.
    pub fn exercise_entries(&self) -> &[ExerciseEntry] {
        &self.exercise_entries
    }

    /// All mood entries, newest first.
    pub fn mood_entries(&self) -> &[MoodEntry] {
        &self.mood_entries
    }

    /// All weight entries, newest first.
    pub fn weight_entries(&self) -> &[WeightEntry] {
        &self.weight_entries
    }

    /// Food entries dated today, newest first.
    pub fn today_food(&self) -> &[FoodEntry] {
        &self.today_food
    }

    /// Exercise entries dated today, newest first.
    pub fn today_exercises(&self) -> &[ExerciseEntry] {
        &self.today_exercises
    }

    /// Newest mood entry dated today, if any.
    pub fn today_mood(&self) -> Option<&MoodEntry> {
        self.today_mood.as_ref()
    }

    /// Food entries whose local calendar day matches `date`, newest first.
    pub fn date_entries(&self, date: NaiveDate) -> Vec<FoodEntry> {
        self.food_entries_on(date).cloned().collect()
    }

    // ---- aggregates ----

    /// Calories consumed on `date`, from per-100g base nutrition.
    pub fn date_calories(&self, date: NaiveDate) -> f64 {
        self.food_entries_on(date).map(|e| e.nutrition.calories).sum()
    }

    /// Protein grams consumed on `date`, from per-100g base nutrition.
    pub fn date_protein(&self, date: NaiveDate) -> f64 {
        self.food_entries_on(date).map(|e| e.nutrition.protein).sum()
    }

    /// Carbohydrate grams consumed on `date`, from per-100g base nutrition.
    pub fn date_carbs(&self, date: NaiveDate) -> f64 {
        self.food_entries_on(date).map(|e| e.nutrition.carbs).sum()
    }

    /// Fat grams consumed on `date`, from per-100g base nutrition.
    pub fn date_fat(&self, date: NaiveDate) -> f64 {
        self.food_entries_on(date).map(|e| e.nutrition.fat).sum()
    }

    /// Calories consumed today.
    pub fn today_calories(&self) -> f64 {
        self.date_calories(today_local())
    }

    /// Protein grams consumed today.
    pub fn today_protein(&self) -> f64 {
        self.date_protein(today_local())
    }

    /// Carbohydrate grams consumed today.
    pub fn today_carbs(&self) -> f64 {
        self.date_carbs(today_local())
    }

    /// Fat grams consumed today.
    pub fn today_fat(&self) -> f64 {
        self.date_fat(today_local())
    }

    /// Fraction of the daily calorie target consumed today, in `[0, 1]`.
    pub fn calorie_progress(&self) -> f64 {
        progress::calorie_progress(self.today_calories(), self.daily_calorie_target_kcal)
    }

    /// Day summaries for the last seven local days, oldest first.
    pub fn weekly_series(&self) -> Vec<DaySummary> {
        let today = today_local();
        (0..7u64)
            .rev()
            .map(|offset| {
                let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
                self.day_summary(date)
            })
            .collect()
    }

    /// Aggregated summary for one local calendar day.
    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        let exercise_minutes: i64 = self
            .exercise_entries
            .iter()
            .filter(|e| local_day(e.timestamp) == date)
            .map(|e| e.duration_secs / 60)
            .sum();
        DaySummary {
            date,
            calories: self.date_calories(date),
            protein: self.date_protein(date),
            carbs: self.date_carbs(date),
            fat: self.date_fat(date),
            exercise_minutes,
            water_intake_ml: WATER_INTAKE_PLACEHOLDER_ML,
        }
    }

    /// Consecutive days ending today with at least one food entry.
    pub fn logging_streak_days(&self) -> u32 {
        let mut streak = 0;
        let mut day = today_local();
        while self.food_entries_on(day).next().is_some() {
            streak += 1;
            day = match day.checked_sub_days(Days::new(1)) {
                Some(previous) => previous,
                None => break,
            };
        }
        streak
    }

    // ---- derived health and goal views ----

    /// BMI from the profile's height and weight.
    pub fn bmi(&self) -> f64 {
        progress::bmi(self.profile.height_cm, self.profile.weight_kg)
    }

    /// Category band for the profile BMI.
    pub fn bmi_category(&self) -> BmiCategory {
        progress::bmi_category(self.bmi())
    }

    /// Goals currently marked active.
    pub fn active_goals(&self) -> Vec<Goal> {
        self.goals.iter().filter(|g| g.is_active).cloned().collect()
    }

    /// All goals, active or not.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The quarterly objective and its key results.
    pub fn okr(&self) -> &Okr {
        &self.okr
    }

    /// Current user profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Live health snapshot.
    pub fn health(&self) -> &HealthSnapshot {
        &self.health
    }

    /// Most recent known body weight in kilograms.
    pub fn current_weight_kg(&self) -> f64 {
        self.current_weight_kg
    }

    /// Daily calorie target in kcal.
    pub fn daily_calorie_target(&self) -> f64 {
        self.daily_calorie_target_kcal
    }

    /// The activated diet plan, if any.
    pub fn active_plan(&self) -> Option<&DietPlan> {
        self.active_plan.as_ref()
    }

    /// Current subscription, if one was purchased this session.
    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    /// Whether an active subscription grants VIP membership.
    pub fn is_vip_member(&self) -> bool {
        self.subscription.as_ref().map_or(false, |s| s.is_active)
    }

    /// Food buddies known to this session.
    pub fn buddies(&self) -> &[FoodBuddy] {
        &self.buddies
    }

    /// All posts in the feed, newest first.
    pub fn posts(&self) -> &[FoodPost] {
        &self.posts
    }

    /// Posts authored by the current profile, newest first.
    pub fn my_posts(&self) -> Vec<FoodPost> {
        self.posts
            .iter()
            .filter(|p| p.author_id == self.profile.id)
            .cloned()
            .collect()
    }

    /// Kind of the first active goal; `Maintenance` when none is active.
    pub fn primary_goal_kind(&self) -> GoalKind {
        self.goals
            .iter()
            .find(|g| g.is_active)
            .map(|g| g.kind)
            .unwrap_or(GoalKind::Maintenance)
    }

    // ---- persistence ----

    /// Blocks until every enqueued snapshot write has been applied.
    pub fn flush_persistence(&self) {
        self.writer.flush();
    }

    // ---- internals ----

    fn food_entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &FoodEntry> {
        self.food_entries
            .iter()
            .filter(move |e| local_day(e.timestamp) == date)
    }

    fn refresh_today_food(&mut self) {
        let today = today_local();
        self.today_food = self
            .food_entries
            .iter()
            .filter(|e| local_day(e.timestamp) == today)
            .cloned()
            .collect();
    }

    fn refresh_today_exercises(&mut self) {
        let today = today_local();
        self.today_exercises = self
            .exercise_entries
            .iter()
            .filter(|e| local_day(e.timestamp) == today)
            .cloned()
            .collect();
    }

    fn refresh_today_mood(&mut self) {
        let today = today_local();
        self.today_mood = self
            .mood_entries
            .iter()
            .find(|e| local_day(e.timestamp) == today)
            .cloned();
    }

    fn persist_food(&self) {
        self.writer
            .enqueue_collection(KEY_FOOD_ENTRIES, &self.food_entries);
    }

    fn persist_exercises(&self) {
        self.writer
            .enqueue_collection(KEY_EXERCISE_ENTRIES, &self.exercise_entries);
    }

    fn persist_moods(&self) {
        self.writer
            .enqueue_collection(KEY_MOOD_ENTRIES, &self.mood_entries);
    }

    fn persist_weights(&self) {
        self.writer
            .enqueue_collection(KEY_WEIGHT_ENTRIES, &self.weight_entries);
    }

    fn persist_profile(&self) {
        self.writer
            .enqueue_collection(KEY_USER_PROFILE, &self.profile);
    }

    fn persist_goals(&self) {
        self.writer.enqueue_collection(KEY_GOALS, &self.goals);
    }
}

fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

fn default_profile() -> UserProfile {
    let today = today_local();
    let birthday = today
        .checked_sub_months(Months::new(25 * 12))
        .unwrap_or(today);
    UserProfile::new("Health Enthusiast", Gender::Female, birthday, 165.0, 55.0)
}

fn default_goals() -> Vec<Goal> {
    vec![
        Goal::new(GoalKind::WeightLoss, 50.0, 55.0, "kg"),
        Goal::new(GoalKind::Fitness, 10000.0, 0.0, "steps"),
        Goal::new(GoalKind::FatLoss, 20.0, 25.0, "%"),
    ]
}

fn default_okr() -> Okr {
    let mut okr = Okr::new("Build a healthy lifestyle", "2024 Q1");
    okr.key_results = vec![
        KeyResult::new("Hit the daily step goal", 10000.0, 0.0, "steps"),
        KeyResult::new("Lose five kilograms", 5.0, 0.0, "kg"),
        KeyResult::new("Keep a 30-day food log", 30.0, 0.0, "days"),
    ];
    okr
}
