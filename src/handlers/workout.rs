use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::db::UserStore;
use crate::errors::AppError;
use crate::handlers::profile::find_profile;
use crate::models::catalog::{Catalog, Exercise};
use crate::models::progress::WorkoutProgress;
use crate::utils::ledger::{self, DayCompletion, ExerciseCompletion};
use crate::utils::planner::{select_exercises, total_exercises};
use crate::utils::validation::{validate_payload, validate_time};

#[derive(Deserialize, Validate)]
pub struct CompleteExerciseRequest {
    #[validate(length(min = 1, message = "Missing user_id"))]
    user_id: String,

    exercise_id: u32,

    /// Minutes spent on the exercise.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1440.0, message = "Duration must be between 0 and 1440 minutes"))]
    duration: f64,
}

#[derive(Deserialize, Validate)]
pub struct CompleteDayRequest {
    #[validate(length(min = 1, message = "Missing user_id"))]
    user_id: String,

    #[validate(range(min = 1, max = 3650, message = "Day must be between 1 and 3650"))]
    day: u32,
}

#[derive(Deserialize, Validate)]
pub struct UpdateTimeRequest {
    #[validate(length(min = 1, message = "Missing user_id"))]
    user_id: String,

    #[validate(length(min = 1, message = "Missing time"))]
    time: String,
}

#[derive(Serialize)]
struct WorkoutResponse<'a> {
    success: bool,
    exercises: Vec<&'a Exercise>,
    current_day: u32,
    total_exercises: usize,
    progress: WorkoutProgress,
}

#[derive(Serialize)]
struct ExerciseCompletionResponse {
    success: bool,
    #[serde(flatten)]
    completion: ExerciseCompletion,
}

#[derive(Serialize)]
struct DayCompletionResponse {
    success: bool,
    #[serde(flatten)]
    completion: DayCompletion,
}

#[derive(Serialize)]
struct UpdateTimeResponse {
    success: bool,
    new_time: String,
}

// GET /api/workout/{user_id}
pub async fn get_workout(
    store: web::Data<dyn UserStore>,
    catalog: web::Data<Catalog>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = find_profile(&**store, &user_id)?;
    let progress = store
        .progress(&user_id)
        .ok_or_else(|| AppError::NotFound("User progress not found".to_string()))?;

    let current_day = progress.current_day;
    Ok(HttpResponse::Ok().json(WorkoutResponse {
        success: true,
        exercises: select_exercises(&catalog, &profile, current_day),
        current_day,
        total_exercises: total_exercises(current_day),
        progress,
    }))
}

// POST /api/workout/complete
pub async fn complete_exercise(
    store: web::Data<dyn UserStore>,
    catalog: web::Data<Catalog>,
    payload: web::Json<CompleteExerciseRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let completion = ledger::record_exercise_completion(
        &**store,
        &catalog,
        &payload.user_id,
        payload.exercise_id,
        payload.duration,
    )?;

    Ok(HttpResponse::Ok().json(ExerciseCompletionResponse { success: true, completion }))
}

// POST /api/workout/day/complete
pub async fn complete_day(
    store: web::Data<dyn UserStore>,
    payload: web::Json<CompleteDayRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;

    let completion = ledger::record_day_completion(&**store, &payload.user_id, payload.day)?;

    Ok(HttpResponse::Ok().json(DayCompletionResponse { success: true, completion }))
}

// POST /api/workout/time/update
pub async fn update_time(
    store: web::Data<dyn UserStore>,
    payload: web::Json<UpdateTimeRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*payload)?;
    validate_time(&payload.time)?;

    ledger::update_preferred_time(&**store, &payload.user_id, &payload.time)?;

    Ok(HttpResponse::Ok().json(UpdateTimeResponse {
        success: true,
        new_time: payload.time.clone(),
    }))
}
