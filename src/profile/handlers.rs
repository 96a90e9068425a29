use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    auth::{dto::UserResponse, repo::User, services::AuthUser},
    error::AppError,
    profile::dto::{split_csv, UpdateProfileRequest},
    profile::repo::{self, ProfileChanges},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/update", put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let changes = ProfileChanges {
        name: payload.name,
        phone_number: payload.phone_number,
        currently_renting: payload.currently_renting,
        monthly_budget: payload.monthly_budget,
        move_in_date: payload.move_in_date,
        preferred_locations: split_csv(&payload.preferred_locations),
        preferred_amenities: split_csv(&payload.preferred_amenities),
    };

    let user = repo::update(&state.db, user_id, &changes)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(user.into()))
}
