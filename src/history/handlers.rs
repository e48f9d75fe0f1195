use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::{
    dto::{format_date, DailySummary, DateQuery, ListQuery, LogFoodRequest, WeeklySummary},
    repo_types::{HistoryEntry, NewHistoryEntry},
    services::{
        day_bounds, resolve_nutrition, week_bounds, week_end, week_start, IntakeTotals, Progress,
    },
};
use crate::{
    auth::AuthUser,
    error::{internal, AppError},
    nutrition::calculator::{compute_weekly, DailyNutritionTargets},
    state::AppState,
};

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(list_history).post(log_food))
        .route("/history/daily", get(daily_summary))
        .route("/history/weekly", get(weekly_summary))
}

async fn stored_targets(
    state: &AppState,
    user_id: &str,
) -> Result<Option<DailyNutritionTargets>, AppError> {
    let profile = state
        .profiles
        .find(user_id)
        .await
        .map_err(internal("Error loading profile"))?;
    Ok(profile.map(|p| p.targets()))
}

fn out_of_range() -> AppError {
    AppError::BadRequest("date must be YYYY-MM-DD".into())
}

/// POST /history: log a food, resolving its nutrition from the food store.
#[instrument(skip(state, payload))]
pub async fn log_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<LogFoodRequest>,
) -> Result<(StatusCode, Json<HistoryEntry>), AppError> {
    let name = payload.food_name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("foodName is required".into()));
    }
    let portion = payload.portion()?;
    let fallback_calories = payload.fallback_calories()?;

    let foods = state
        .foods
        .all_foods()
        .await
        .map_err(internal("Error searching for food"))?;
    let resolved = resolve_nutrition(&name, fallback_calories, portion, &foods);
    debug!(%name, matched = resolved.matched, calories = resolved.calories, "nutrition resolved");

    let entry = state
        .history
        .insert(NewHistoryEntry {
            user_id: user_id.clone(),
            name,
            calories: resolved.calories,
            carbs: resolved.macros.carbs,
            protein: resolved.macros.protein,
            fat: resolved.macros.fat,
            portion_multiplier: portion,
            meal_type: payload.meal_type,
            notes: payload.notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        })
        .await
        .map_err(internal("Error saving food history"))?;

    info!(%user_id, id = %entry.id, "food logged");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let limit = q.limit()?;
    let entries = state
        .history
        .list_between(&user_id, q.from, q.to, Some(limit))
        .await
        .map_err(internal("Error loading food history"))?;
    Ok(Json(entries))
}

/// GET /history/daily?date=2024-03-06
#[instrument(skip(state))]
pub async fn daily_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DateQuery>,
) -> Result<Json<DailySummary>, AppError> {
    let date = q.date()?;
    let (from, to) = day_bounds(date).ok_or_else(out_of_range)?;
    let entries = state
        .history
        .list_between(&user_id, Some(from), Some(to), None)
        .await
        .map_err(internal("Error loading food history"))?;

    let totals = IntakeTotals::from_entries(&entries);
    let targets = stored_targets(&state, &user_id).await?;
    Ok(Json(DailySummary {
        date: format_date(date),
        totals,
        progress: targets.as_ref().map(|t| Progress::daily(&totals, t)),
        targets,
    }))
}

/// GET /history/weekly?date=2024-03-06: the Sunday-to-Saturday week of `date`.
#[instrument(skip(state))]
pub async fn weekly_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DateQuery>,
) -> Result<Json<WeeklySummary>, AppError> {
    let date = q.date()?;
    let (from, to) = week_bounds(date).ok_or_else(out_of_range)?;
    let start = week_start(date).ok_or_else(out_of_range)?;
    let end = week_end(start).ok_or_else(out_of_range)?;
    let entries = state
        .history
        .list_between(&user_id, Some(from), Some(to), None)
        .await
        .map_err(internal("Error loading food history"))?;

    let totals = IntakeTotals::from_entries(&entries);
    let weekly = stored_targets(&state, &user_id)
        .await?
        .map(|daily| compute_weekly(&daily));
    Ok(Json(WeeklySummary {
        week_start: format_date(start),
        week_end: format_date(end),
        totals,
        average_daily_calories: totals.calories / 7.0,
        progress: weekly.as_ref().map(|t| Progress::weekly(&totals, t)),
        targets: weekly,
    }))
}
