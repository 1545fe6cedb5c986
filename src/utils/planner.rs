use crate::errors::AppError;
use crate::models::catalog::{Catalog, Exercise, NutritionTier};
use crate::models::user::{Goal, UserProfile};

/// Exercises on day one; one more is added every two days.
pub const BASE_EXERCISES: usize = 14;

pub fn total_exercises(current_day: u32) -> usize {
    BASE_EXERCISES + (current_day.max(1) as usize - 1) / 2
}

pub fn matches_profile(exercise: &Exercise, profile: &UserProfile) -> bool {
    exercise.level == profile.fitness_level.as_str()
        && (exercise.gender == profile.gender.as_str() || exercise.gender == "both")
        && (exercise.goal == profile.goal.as_str() || exercise.goal == "general")
}

/// Matching exercises in catalog order, capped at the day's total.
pub fn select_exercises<'a>(catalog: &'a Catalog, profile: &UserProfile, current_day: u32) -> Vec<&'a Exercise> {
    catalog
        .exercises
        .iter()
        .filter(|exercise| matches_profile(exercise, profile))
        .take(total_exercises(current_day))
        .collect()
}

pub fn daily_calories(bmr: f64, goal: &Goal) -> i64 {
    (bmr * goal.calorie_multiplier()).floor() as i64
}

pub struct NutritionPlan<'a> {
    pub plan: &'a NutritionTier,
    pub daily_calories: i64,
}

pub fn select_nutrition<'a>(catalog: &'a Catalog, profile: &UserProfile) -> Result<NutritionPlan<'a>, AppError> {
    let tier = profile.economic_level.as_str();
    let plan = catalog
        .tier(tier)
        .ok_or_else(|| AppError::NotFound(format!("Nutrition plan not found for tier {}", tier)))?;

    Ok(NutritionPlan {
        plan,
        daily_calories: daily_calories(profile.bmr, &profile.goal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Instructions;
    use crate::models::user::{EconomicLevel, FitnessLevel, Gender};
    use chrono::Utc;
    use std::collections::HashMap;

    fn exercise(id: u32, level: &str, gender: &str, goal: &str) -> Exercise {
        Exercise {
            id,
            name: format!("Exercise {}", id),
            level: level.to_string(),
            gender: gender.to_string(),
            goal: goal.to_string(),
            duration: 60,
            met_value: 5.0,
            instructions: Instructions::default(),
        }
    }

    fn profile(gender: Gender, goal: Goal) -> UserProfile {
        UserProfile {
            user_id: "u".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            age: 30.0,
            height: 170.0,
            weight: 65.0,
            gender,
            fitness_level: FitnessLevel::Beginner,
            goal,
            economic_level: EconomicLevel::Medium,
            preferred_time: "07:00".to_string(),
            bmi: 22.5,
            bmr: 1700.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn exercise_count_ramps_every_two_days() {
        assert_eq!(total_exercises(1), 14);
        assert_eq!(total_exercises(2), 14);
        assert_eq!(total_exercises(3), 15);
        assert_eq!(total_exercises(5), 16);
    }

    #[test]
    fn general_exercises_for_both_genders_match_any_goal() {
        let general = exercise(1, "beginner", "both", "general");
        for goal in [Goal::WeightLoss, Goal::Toning, Goal::Other("yoga".into())] {
            assert!(matches_profile(&general, &profile(Gender::Male, goal.clone())));
            assert!(matches_profile(&general, &profile(Gender::Female, goal)));
        }
    }

    #[test]
    fn filter_respects_level_gender_and_goal() {
        let p = profile(Gender::Female, Goal::Toning);
        assert!(!matches_profile(&exercise(1, "advanced", "both", "general"), &p));
        assert!(!matches_profile(&exercise(2, "beginner", "male", "general"), &p));
        assert!(!matches_profile(&exercise(3, "beginner", "both", "muscleGain"), &p));
        assert!(matches_profile(&exercise(4, "beginner", "female", "toning"), &p));
    }

    #[test]
    fn selection_keeps_catalog_order_and_caps_count() {
        let mut catalog = Catalog::default();
        catalog.exercises = (1..=20).rev().map(|id| exercise(id, "beginner", "both", "general")).collect();
        catalog.exercises.push(exercise(99, "advanced", "both", "general"));

        let p = profile(Gender::Male, Goal::Health);
        let day_one: Vec<u32> = select_exercises(&catalog, &p, 1).iter().map(|e| e.id).collect();
        assert_eq!(day_one, (7..=20).rev().collect::<Vec<u32>>());
        assert_eq!(select_exercises(&catalog, &p, 5).len(), 16);
    }

    #[test]
    fn no_match_is_an_empty_list() {
        let catalog = Catalog::default();
        assert!(select_exercises(&catalog, &profile(Gender::Male, Goal::Health), 1).is_empty());
    }

    #[test]
    fn daily_calories_apply_goal_multiplier() {
        assert_eq!(daily_calories(1700.0, &Goal::WeightLoss), 1360);
        assert_eq!(daily_calories(1700.0, &Goal::MuscleGain), 2210);
        assert_eq!(daily_calories(1723.0, &Goal::Endurance), 2412);
        assert_eq!(daily_calories(1700.0, &Goal::Other("x".into())), 2040);
    }

    #[test]
    fn missing_tier_is_not_found() {
        let catalog = Catalog { exercises: Vec::new(), tiers: HashMap::new() };
        let err = select_nutrition(&catalog, &profile(Gender::Male, Goal::Health)).err();
        assert_eq!(err, Some(AppError::NotFound("Nutrition plan not found for tier medium".to_string())));
    }

    #[test]
    fn tier_is_returned_with_calorie_target() {
        let mut catalog = Catalog::default();
        catalog.tiers.insert("medium".to_string(), NutritionTier { name: "Medium Plan".into(), ..Default::default() });
        let plan = select_nutrition(&catalog, &profile(Gender::Female, Goal::Toning)).ok().unwrap();
        assert_eq!(plan.plan.name, "Medium Plan");
        assert_eq!(plan.daily_calories, 1870);
    }
}
