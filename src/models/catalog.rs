use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const DEFAULT_MET: f64 = 5.0;

fn default_met() -> f64 {
    DEFAULT_MET
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Instructions {
    #[serde(default)]
    pub male: Vec<String>,
    #[serde(default)]
    pub female: Vec<String>,
}

/// Catalog exercise. `gender` is `male`, `female` or `both`; `goal` is a goal
/// name or `general`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub level: String,
    pub gender: String,
    pub goal: String,
    /// Estimated duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(rename = "met_value", alias = "met", default = "default_met")]
    pub met_value: f64,
    #[serde(default)]
    pub instructions: Instructions,
}

/// Nutrition plan for one economic tier. Meal slots are passed through as loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NutritionTier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub meals: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ExerciseDocument {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Deserialize, Debug, Default)]
pub struct NutritionDocument {
    #[serde(default)]
    pub tiers: HashMap<String, NutritionTier>,
}

/// Read-only exercise list and nutrition tiers, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub tiers: HashMap<String, NutritionTier>,
}

impl Catalog {
    pub fn find_exercise(&self, id: u32) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    pub fn tier(&self, name: &str) -> Option<&NutritionTier> {
        self.tiers.get(name)
    }
}
