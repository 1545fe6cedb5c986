use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use validator::Validate;
use crate::errors::AppError;
use crate::models::user::{EconomicLevel, FitnessLevel, Gender};

lazy_static! {
    static ref USER_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").unwrap();
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_values()
            .flat_map(|errors| errors.iter())
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect();
        messages.sort();
        messages.dedup();
        AppError::BadRequest(messages.join("; "))
    })
}

pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    if !USER_ID_RE.is_match(user_id) {
        return Err(AppError::BadRequest(
            "user_id must be 1-64 letters, digits, '.', '_' or '-'".to_string(),
        ));
    }
    Ok(())
}

/// Reads a required positive number that may arrive as a JSON number or a numeric string.
pub fn parse_positive_number(field: &str, value: Option<&Value>) -> Result<f64, AppError> {
    let number = match value {
        None | Some(Value::Null) => return Err(AppError::BadRequest(format!("Missing {}", field))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(AppError::BadRequest(format!("Missing {}", field)))
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() && n > 0.0 => Ok(n),
        Some(n) if n.is_finite() => Err(AppError::BadRequest(format!("{} must be greater than 0", field))),
        _ => Err(AppError::BadRequest(format!("Invalid {} value", field))),
    }
}

/// Like `parse_positive_number`, bounded to `min..=max`.
pub fn parse_number_in_range(field: &str, value: Option<&Value>, min: f64, max: f64) -> Result<f64, AppError> {
    let number = parse_positive_number(field, value)?;
    if number < min || number > max {
        return Err(AppError::BadRequest(format!("{} must be between {} and {}", field, min, max)));
    }
    Ok(number)
}

pub fn parse_gender(gender: &str) -> Result<Gender, AppError> {
    gender
        .parse()
        .map_err(|_| AppError::BadRequest("Gender must be either male or female".to_string()))
}

pub fn parse_fitness_level(level: &str) -> Result<FitnessLevel, AppError> {
    level.parse().map_err(|_| {
        AppError::BadRequest("Fitness level must be beginner, intermediate or advanced".to_string())
    })
}

pub fn parse_economic_level(level: &str) -> Result<EconomicLevel, AppError> {
    level.parse().map_err(|_| {
        AppError::BadRequest("Economic level must be basic, medium or premium".to_string())
    })
}

/// Accepts `HH:MM` on a 24 hour clock.
pub fn validate_time(time: &str) -> Result<(), AppError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| AppError::BadRequest("Invalid time format, expected HH:MM".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(parse_positive_number("age", Some(&json!(25))).unwrap(), 25.0);
        assert_eq!(parse_positive_number("height", Some(&json!("175.5"))).unwrap(), 175.5);
    }

    #[test]
    fn missing_empty_and_non_numeric_values_are_rejected() {
        let missing = parse_positive_number("age", None).unwrap_err();
        assert_eq!(missing, AppError::BadRequest("Missing age".to_string()));

        let empty = parse_positive_number("weight", Some(&json!(""))).unwrap_err();
        assert_eq!(empty, AppError::BadRequest("Missing weight".to_string()));

        let text = parse_positive_number("age", Some(&json!("twenty"))).unwrap_err();
        assert_eq!(text, AppError::BadRequest("Invalid age value".to_string()));

        let zero = parse_positive_number("height", Some(&json!(0))).unwrap_err();
        assert_eq!(zero, AppError::BadRequest("height must be greater than 0".to_string()));
    }

    #[test]
    fn bounded_numbers_reject_extremes() {
        assert_eq!(parse_number_in_range("weight", Some(&json!("70")), 2.0, 1000.0).unwrap(), 70.0);
        let huge = parse_number_in_range("weight", Some(&json!(1e300)), 2.0, 1000.0).unwrap_err();
        assert_eq!(huge, AppError::BadRequest("weight must be between 2 and 1000".to_string()));
        assert!(parse_number_in_range("height", Some(&json!(1e-300)), 30.0, 300.0).is_err());
    }

    #[test]
    fn user_ids_are_restricted() {
        assert!(validate_user_id("user_1700000000").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("../etc/passwd").is_err());
    }

    #[test]
    fn time_of_day_format() {
        assert!(validate_time("07:00").is_ok());
        assert!(validate_time("23:59").is_ok());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("7am").is_err());
    }

    #[test]
    fn enum_fields_reject_unknown_values() {
        assert_eq!(parse_gender("female").unwrap(), Gender::Female);
        assert!(parse_gender("other").is_err());
        assert_eq!(parse_fitness_level("advanced").unwrap(), FitnessLevel::Advanced);
        assert!(parse_economic_level("luxury").is_err());
    }
}
