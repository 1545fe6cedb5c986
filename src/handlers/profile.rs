use actix_web::{web, HttpResponse};
use serde::Serialize;
use crate::db::UserStore;
use crate::errors::AppError;
use crate::models::user::{ProfileRequest, UserProfile};
use crate::utils::{calculator::build_profile, ledger};

#[derive(Serialize)]
struct CreateProfileResponse {
    success: bool,
    user_id: String,
    bmi: f64,
    bmr: f64,
}

#[derive(Serialize)]
struct ProfileResponse {
    success: bool,
    data: UserProfile,
}

pub(crate) fn find_profile(store: &dyn UserStore, user_id: &str) -> Result<UserProfile, AppError> {
    store
        .profile(user_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

// POST /api/profile
pub async fn create_profile(
    store: web::Data<dyn UserStore>,
    payload: web::Json<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = build_profile(&payload)?;

    let response = CreateProfileResponse {
        success: true,
        user_id: profile.user_id.clone(),
        bmi: profile.bmi,
        bmr: profile.bmr,
    };
    ledger::initialize(&**store, profile);

    Ok(HttpResponse::Ok().json(response))
}

// GET /api/profile/{user_id}
pub async fn get_profile(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = find_profile(&**store, &user_id)?;
    Ok(HttpResponse::Ok().json(ProfileResponse { success: true, data: profile }))
}
