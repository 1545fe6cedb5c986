use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use validator::Validate;
use chrono::Utc;
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(()),
        }
    }
}

/// Training goal. Values outside the known set are kept as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Toning,
    #[default]
    Health,
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::WeightLoss => "weightLoss",
            Goal::MuscleGain => "muscleGain",
            Goal::Endurance => "endurance",
            Goal::Toning => "toning",
            Goal::Health => "health",
            Goal::Other(goal) => goal,
        }
    }

    /// Daily calorie multiplier applied on top of BMR.
    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            Goal::WeightLoss => 0.8,
            Goal::MuscleGain => 1.3,
            Goal::Endurance => 1.4,
            Goal::Toning => 1.1,
            Goal::Health | Goal::Other(_) => 1.2,
        }
    }
}

impl From<&str> for Goal {
    fn from(s: &str) -> Self {
        match s {
            "weightLoss" => Goal::WeightLoss,
            "muscleGain" => Goal::MuscleGain,
            "endurance" => Goal::Endurance,
            "toning" => Goal::Toning,
            "health" => Goal::Health,
            other => Goal::Other(other.to_string()),
        }
    }
}

impl Serialize for Goal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EconomicLevel {
    #[default]
    Basic,
    Medium,
    Premium,
}

impl EconomicLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EconomicLevel::Basic => "basic",
            EconomicLevel::Medium => "medium",
            EconomicLevel::Premium => "premium",
        }
    }
}

impl FromStr for EconomicLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(EconomicLevel::Basic),
            "medium" => Ok(EconomicLevel::Medium),
            "premium" => Ok(EconomicLevel::Premium),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EconomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted profile together with the metrics derived from it.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub economic_level: EconomicLevel,
    pub preferred_time: String,
    pub bmi: f64,
    pub bmr: f64,
    #[serde(rename = "created_at")]
    pub created_at: chrono::DateTime<Utc>,
}

/// Raw profile submission. Numeric fields accept numbers or numeric strings.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(rename = "user_id", default)]
    pub user_id: Option<String>,

    #[validate(required(message = "Missing firstName"))]
    #[validate(length(min = 1, message = "Missing firstName"))]
    pub first_name: Option<String>,

    #[validate(required(message = "Missing lastName"))]
    #[validate(length(min = 1, message = "Missing lastName"))]
    pub last_name: Option<String>,

    pub age: Option<Value>,
    pub height: Option<Value>,
    pub weight: Option<Value>,

    #[validate(required(message = "Missing gender"))]
    #[validate(length(min = 1, message = "Missing gender"))]
    pub gender: Option<String>,

    pub fitness_level: Option<String>,
    pub goal: Option<String>,
    pub economic_level: Option<String>,

    #[serde(alias = "preferred_time")]
    pub preferred_time: Option<String>,
}
