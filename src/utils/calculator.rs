use chrono::Utc;
use uuid::Uuid;
use crate::errors::AppError;
use crate::models::user::{Gender, Goal, ProfileRequest, UserProfile};
use crate::utils::validation::{
    parse_economic_level, parse_fitness_level, parse_gender, parse_number_in_range, validate_payload,
    validate_time, validate_user_id,
};

pub const DEFAULT_PREFERRED_TIME: &str = "07:00";

pub const AGE_RANGE: (f64, f64) = (1.0, 150.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (30.0, 300.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (2.0, 1000.0);

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// BMI rounded to one decimal.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, AppError> {
    if height_cm <= 0.0 || !height_cm.is_finite() {
        return Err(AppError::BadRequest("Invalid height or weight values".to_string()));
    }
    let height_m = height_cm / 100.0;
    let bmi = round_to(weight_kg / (height_m * height_m), 1);
    if !bmi.is_finite() {
        return Err(AppError::BadRequest("Invalid height or weight values".to_string()));
    }
    Ok(bmi)
}

/// Harris-Benedict BMR, rounded to whole kcal.
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let bmr = match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    };
    round_to(bmr, 0)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Validates a raw submission and derives BMI/BMR from it.
pub fn build_profile(request: &ProfileRequest) -> Result<UserProfile, AppError> {
    validate_payload(request)?;

    let first_name = non_empty(&request.first_name)
        .ok_or_else(|| AppError::BadRequest("Missing firstName".to_string()))?;
    let last_name = non_empty(&request.last_name)
        .ok_or_else(|| AppError::BadRequest("Missing lastName".to_string()))?;

    let age = parse_number_in_range("age", request.age.as_ref(), AGE_RANGE.0, AGE_RANGE.1)?;
    let height = parse_number_in_range("height", request.height.as_ref(), HEIGHT_CM_RANGE.0, HEIGHT_CM_RANGE.1)?;
    let weight = parse_number_in_range("weight", request.weight.as_ref(), WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1)?;
    let gender = parse_gender(request.gender.as_deref().unwrap_or_default().trim())?;

    let fitness_level = match non_empty(&request.fitness_level) {
        Some(level) => parse_fitness_level(level)?,
        None => Default::default(),
    };
    let economic_level = match non_empty(&request.economic_level) {
        Some(level) => parse_economic_level(level)?,
        None => Default::default(),
    };
    let goal = non_empty(&request.goal).map(Goal::from).unwrap_or_default();

    let preferred_time = non_empty(&request.preferred_time).unwrap_or(DEFAULT_PREFERRED_TIME);
    validate_time(preferred_time)?;

    let user_id = match non_empty(&request.user_id) {
        Some(id) => {
            validate_user_id(id)?;
            id.to_string()
        }
        None => format!("user_{}", Uuid::now_v7().simple()),
    };

    let bmi = calculate_bmi(weight, height)?;
    let bmr = calculate_bmr(gender, weight, height, age);
    if !bmr.is_finite() {
        return Err(AppError::BadRequest("Invalid age, height or weight values".to_string()));
    }

    Ok(UserProfile {
        user_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
        height,
        weight,
        gender,
        fitness_level,
        goal,
        economic_level,
        preferred_time: preferred_time.to_string(),
        bmi,
        bmr,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{EconomicLevel, FitnessLevel};
    use serde_json::json;

    fn request() -> ProfileRequest {
        ProfileRequest {
            user_id: Some("user_1".to_string()),
            first_name: Some("Sara".to_string()),
            last_name: Some("Ali".to_string()),
            age: Some(json!(25)),
            height: Some(json!(175)),
            weight: Some(json!(70)),
            gender: Some("male".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn bmi_is_rounded_to_one_decimal() {
        assert_eq!(calculate_bmi(70.0, 175.0).unwrap(), 22.9);
        assert_eq!(calculate_bmi(55.0, 160.0).unwrap(), 21.5);
    }

    #[test]
    fn zero_height_is_a_validation_error() {
        assert!(matches!(calculate_bmi(70.0, 0.0), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn bmr_branches_on_gender() {
        // 88.362 + 937.79 + 839.825 - 141.925 = 1723.052
        assert_eq!(calculate_bmr(Gender::Male, 70.0, 175.0, 25.0), 1723.0);
        // 447.593 + 647.29 + 542.15 - 108.25 = 1528.783
        assert_eq!(calculate_bmr(Gender::Female, 70.0, 175.0, 25.0), 1529.0);
    }

    #[test]
    fn build_profile_derives_metrics_and_defaults() {
        let profile = build_profile(&request()).unwrap();
        assert_eq!(profile.user_id, "user_1");
        assert_eq!(profile.bmi, 22.9);
        assert_eq!(profile.bmr, 1723.0);
        assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
        assert_eq!(profile.goal, Goal::Health);
        assert_eq!(profile.economic_level, EconomicLevel::Basic);
        assert_eq!(profile.preferred_time, "07:00");
    }

    #[test]
    fn build_profile_generates_an_id_when_absent() {
        let mut req = request();
        req.user_id = None;
        let profile = build_profile(&req).unwrap();
        assert!(profile.user_id.starts_with("user_"));
    }

    #[test]
    fn build_profile_names_the_missing_field() {
        let mut req = request();
        req.last_name = Some(String::new());
        assert_eq!(
            build_profile(&req).unwrap_err(),
            AppError::BadRequest("Missing lastName".to_string())
        );

        let mut req = request();
        req.weight = None;
        assert_eq!(
            build_profile(&req).unwrap_err(),
            AppError::BadRequest("Missing weight".to_string())
        );
    }

    #[test]
    fn extreme_measurements_are_rejected() {
        let mut req = request();
        req.height = Some(json!(1e-300));
        req.weight = Some(json!(1e300));
        assert!(matches!(build_profile(&req), Err(AppError::BadRequest(_))));

        let mut req = request();
        req.age = Some(json!("9999"));
        assert_eq!(
            build_profile(&req).unwrap_err(),
            AppError::BadRequest("age must be between 1 and 150".to_string())
        );
    }

    #[test]
    fn names_are_trimmed_and_blank_names_rejected() {
        let mut req = request();
        req.first_name = Some("   ".to_string());
        assert_eq!(
            build_profile(&req).unwrap_err(),
            AppError::BadRequest("Missing firstName".to_string())
        );

        let mut req = request();
        req.last_name = Some("  Ali ".to_string());
        assert_eq!(build_profile(&req).unwrap().last_name, "Ali");
    }

    #[test]
    fn unknown_goal_is_kept_verbatim() {
        let mut req = request();
        req.goal = Some("flexibility".to_string());
        let profile = build_profile(&req).unwrap();
        assert_eq!(profile.goal, Goal::Other("flexibility".to_string()));
        assert_eq!(profile.goal.calorie_multiplier(), 1.2);
    }
}
