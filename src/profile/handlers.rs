use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{dto::PutProfileRequest, repo_types::ProfileUpdate, repo_types::UserProfile};
use crate::{
    auth::AuthUser,
    error::{internal, AppError},
    nutrition::{calculator::compute_targets, dto::TargetsResponse, validation::validate_profile},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/me/profile", get(get_profile).put(put_profile))
        .route("/me/targets", get(get_targets))
}

async fn load_profile(state: &AppState, user_id: &str) -> Result<UserProfile, AppError> {
    state
        .profiles
        .find(user_id)
        .await
        .map_err(internal("Error loading profile"))?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))
}

/// PUT /me/profile: validate, recalculate targets, store.
#[instrument(skip(state, payload))]
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<PutProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let health = validate_profile(&payload.health).map_err(|e| {
        warn!(%user_id, field = e.field(), error = %e, "profile rejected");
        e
    })?;
    let targets = compute_targets(&health);

    let profile = state
        .profiles
        .upsert(ProfileUpdate {
            user_id: user_id.clone(),
            first_name: PutProfileRequest::clean(payload.first_name),
            last_name: PutProfileRequest::clean(payload.last_name),
            health,
            targets,
        })
        .await
        .map_err(internal("Error saving profile"))?;

    info!(%user_id, calories = targets.calories, "profile saved");
    Ok(Json(profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    load_profile(&state, &user_id).await.map(Json)
}

#[instrument(skip(state))]
pub async fn get_targets(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<TargetsResponse>, AppError> {
    let profile = load_profile(&state, &user_id).await?;
    Ok(Json(profile.targets().into()))
}
