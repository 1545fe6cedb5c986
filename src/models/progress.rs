use serde::Serialize;
use chrono::Utc;
use std::collections::BTreeSet;

/// Per-user workout progression.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkoutProgress {
    pub current_day: u32,
    pub completed_days: BTreeSet<u32>,
    pub start_date: chrono::DateTime<Utc>,
    pub preferred_time: String,
    pub actual_start_time: Option<String>,
    pub total_calories_burned: f64,
    pub streak: u32,
}

impl WorkoutProgress {
    pub fn new(preferred_time: &str) -> Self {
        WorkoutProgress {
            current_day: 1,
            completed_days: BTreeSet::new(),
            start_date: Utc::now(),
            preferred_time: preferred_time.to_string(),
            actual_start_time: None,
            total_calories_burned: 0.0,
            streak: 0,
        }
    }
}
