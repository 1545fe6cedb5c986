use lazy_static::lazy_static;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Map};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use crate::models::catalog::{Catalog, Exercise, ExerciseDocument, Instructions, NutritionDocument, NutritionTier};

pub const EXERCISES_FILE: &str = "exercises.json";
pub const NUTRITION_FILE: &str = "nutrition.json";

lazy_static! {
    static ref DEFAULT_CATALOG: Catalog = build_default_catalog();
}

/// Minimal built-in catalog used when the data documents are unavailable.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn build_default_catalog() -> Catalog {
    let exercises = vec![
        Exercise {
            id: 1,
            name: "Push-ups".into(),
            level: "beginner".into(),
            gender: "both".into(),
            goal: "general".into(),
            duration: 120,
            met_value: 8.0,
            instructions: Instructions {
                male: steps(&["Start in plank position", "Lower to chest", "Push up"]),
                female: steps(&["Modified position available", "Lower to chest", "Push up"]),
            },
        },
        Exercise {
            id: 2,
            name: "Squats".into(),
            level: "beginner".into(),
            gender: "both".into(),
            goal: "general".into(),
            duration: 180,
            met_value: 6.0,
            instructions: Instructions {
                male: steps(&["Stand with feet apart", "Lower down", "Stand up"]),
                female: steps(&["Hip-width stance", "Keep chest up", "Push through heels"]),
            },
        },
        Exercise {
            id: 3,
            name: "Plank".into(),
            level: "beginner".into(),
            gender: "both".into(),
            goal: "general".into(),
            duration: 60,
            met_value: 4.0,
            instructions: Instructions {
                male: steps(&["Hold plank position", "Keep body straight", "Breathe normally"]),
                female: steps(&["Forearm plank", "Engage core", "Hold steady"]),
            },
        },
    ];

    let mut tiers = HashMap::new();
    for (key, name, breakfast, lunch, dinner) in [
        ("basic", "Basic Plan", ("Oatmeal", 350), ("Chicken Rice", 450), ("Fish & Vegetables", 400)),
        ("medium", "Medium Plan", ("Avocado Toast", 420), ("Quinoa Bowl", 520), ("Salmon & Potato", 550)),
        ("premium", "Premium Plan", ("Acai Bowl", 480), ("Steak Salad", 580), ("Lobster & Quinoa", 620)),
    ] {
        let mut meals = Map::new();
        for (slot, (meal, calories)) in [("breakfast", breakfast), ("lunch", lunch), ("dinner", dinner)] {
            meals.insert(slot.to_string(), json!([{ "name": meal, "calories": calories }]));
        }
        tiers.insert(
            key.to_string(),
            NutritionTier { name: name.to_string(), meals, ..Default::default() },
        );
    }

    Catalog { exercises, tiers }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Loads `exercises.json` and `nutrition.json` from `data_dir`. Each document
/// falls back to the built-in default on its own, with a warning.
pub fn load_catalog(data_dir: &Path) -> Catalog {
    let exercises_path = data_dir.join(EXERCISES_FILE);
    let exercises = match read_document::<ExerciseDocument>(&exercises_path) {
        Ok(doc) => {
            info!("Loaded {} exercises from {}", doc.exercises.len(), exercises_path.display());
            doc.exercises
        }
        Err(e) => {
            warn!("Could not load {}: {}. Using built-in exercises", exercises_path.display(), e);
            default_catalog().exercises.clone()
        }
    };

    let nutrition_path = data_dir.join(NUTRITION_FILE);
    let tiers = match read_document::<NutritionDocument>(&nutrition_path) {
        Ok(doc) => {
            info!("Loaded {} nutrition tiers from {}", doc.tiers.len(), nutrition_path.display());
            doc.tiers
        }
        Err(e) => {
            warn!("Could not load {}: {}. Using built-in nutrition tiers", nutrition_path.display(), e);
            default_catalog().tiers.clone()
        }
    };

    Catalog { exercises, tiers }
}
