//! Workout progress bookkeeping: calories, completed days, streak and
//! preferred time. Every mutation goes through `UserStore::update_progress`.

use log::{debug, info};
use serde::Serialize;
use crate::db::UserStore;
use crate::errors::AppError;
use crate::models::catalog::Catalog;
use crate::models::progress::WorkoutProgress;
use crate::models::user::UserProfile;
use crate::utils::calculator::round_to;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExerciseCompletion {
    pub calories_burned: f64,
    pub total_calories: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayCompletion {
    pub completed_days: Vec<u32>,
    pub current_day: u32,
    pub streak: u32,
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// Stores the profile with a fresh progress entry. A later submission for the
/// same id replaces both.
pub fn initialize(store: &dyn UserStore, profile: UserProfile) -> WorkoutProgress {
    let progress = WorkoutProgress::new(&profile.preferred_time);
    info!("Initialized progress for {}", profile.user_id);
    store.put(profile, progress.clone());
    progress
}

/// Longest single exercise session accepted, in minutes.
pub const MAX_DURATION_MINUTES: f64 = 1440.0;

/// Highest programme day accepted.
pub const MAX_DAY: u32 = 3650;

/// Calories for `duration_minutes` of an exercise: MET x weight(kg) x hours.
pub fn exercise_calories(met_value: f64, weight_kg: f64, duration_minutes: f64) -> f64 {
    round_to(met_value * weight_kg * (duration_minutes / 60.0), 1)
}

pub fn record_exercise_completion(
    store: &dyn UserStore,
    catalog: &Catalog,
    user_id: &str,
    exercise_id: u32,
    duration_minutes: f64,
) -> Result<ExerciseCompletion, AppError> {
    if !(0.0..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
        return Err(AppError::BadRequest(format!(
            "Duration must be between 0 and {} minutes",
            MAX_DURATION_MINUTES
        )));
    }
    let exercise = catalog
        .find_exercise(exercise_id)
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    let mut outcome = None;
    store.update_progress(user_id, &mut |profile, progress| {
        let calories_burned = exercise_calories(exercise.met_value, profile.weight, duration_minutes);
        let total_calories = round_to(progress.total_calories_burned + calories_burned, 1);
        if !calories_burned.is_finite() || !total_calories.is_finite() {
            outcome = Some(Err(AppError::BadRequest("Calories burned out of range".to_string())));
            return;
        }
        progress.total_calories_burned = total_calories;
        outcome = Some(Ok(ExerciseCompletion { calories_burned, total_calories }));
    });

    let completion = outcome.ok_or_else(user_not_found)??;
    debug!(
        "{} completed exercise {} for {} min, {} kcal",
        user_id, exercise_id, duration_minutes, completion.calories_burned
    );
    Ok(completion)
}

/// Marks `day` complete. Re-submitting a completed day changes nothing.
pub fn record_day_completion(store: &dyn UserStore, user_id: &str, day: u32) -> Result<DayCompletion, AppError> {
    if !(1..=MAX_DAY).contains(&day) {
        return Err(AppError::BadRequest(format!("Day must be between 1 and {}", MAX_DAY)));
    }

    let mut snapshot = None;
    store.update_progress(user_id, &mut |_, progress| {
        if progress.completed_days.insert(day) {
            progress.current_day = progress.current_day.max(day + 1);
            progress.streak += 1;
            info!("{} completed day {}, streak {}", user_id, day, progress.streak);
        }
        snapshot = Some(DayCompletion {
            completed_days: progress.completed_days.iter().copied().collect(),
            current_day: progress.current_day,
            streak: progress.streak,
        });
    });
    snapshot.ok_or_else(user_not_found)
}

pub fn update_preferred_time(store: &dyn UserStore, user_id: &str, time: &str) -> Result<(), AppError> {
    let found = store.update_progress(user_id, &mut |_, progress| {
        progress.preferred_time = time.to_string();
        progress.actual_start_time = Some(time.to_string());
    });
    if !found {
        return Err(user_not_found());
    }
    Ok(())
}
