use actix_web::{web, HttpResponse};
use serde::Serialize;
use crate::db::UserStore;
use crate::errors::AppError;
use crate::handlers::profile::find_profile;
use crate::models::catalog::{Catalog, NutritionTier};
use crate::models::user::EconomicLevel;
use crate::utils::planner::select_nutrition;

#[derive(Serialize)]
struct NutritionResponse<'a> {
    success: bool,
    plan: &'a NutritionTier,
    daily_calories: i64,
    economic_level: EconomicLevel,
}

// GET /api/nutrition/{user_id}
pub async fn get_nutrition(
    store: web::Data<dyn UserStore>,
    catalog: web::Data<Catalog>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = find_profile(&**store, &user_id)?;
    let nutrition = select_nutrition(&catalog, &profile)?;

    Ok(HttpResponse::Ok().json(NutritionResponse {
        success: true,
        plan: nutrition.plan,
        daily_calories: nutrition.daily_calories,
        economic_level: profile.economic_level,
    }))
}
