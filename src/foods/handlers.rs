use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::{
    dto::{normalize_query, FoodDetails, SearchQuery, TopOnsRequest, TopOnsResponse},
    nutrients::extract_macros,
    ranker::{find_best_match, SearchOutcome},
    topons::{apply_top_ons, find_top_on, sum_top_ons, top_on_nutrition, TopOn, TOP_ONS},
};
use crate::{
    error::{internal, AppError},
    state::AppState,
};

pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_food))
        .route("/search/top-ons", post(search_with_top_ons))
        .route("/top-ons", get(list_top_ons))
}

/// GET /search?query=jollof
#[instrument(skip(state))]
pub async fn search_food(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<FoodDetails>, AppError> {
    let query = q.normalized()?;
    let foods = state
        .foods
        .all_foods()
        .await
        .map_err(internal("Error searching for food"))?;

    let SearchOutcome::Found(found) = find_best_match(&query, &foods) else {
        info!(%query, candidates = foods.len(), "food not found");
        return Err(AppError::NotFound("Food not found".into()));
    };

    let macros = extract_macros(&found.record.nutrient_breakdown);
    debug!(
        %query,
        name = %found.record.name,
        score = found.score,
        carbs = macros.carbs,
        protein = macros.protein,
        fat = macros.fat,
        "food matched"
    );
    Ok(Json(FoodDetails::new(found.record, macros)))
}

/// POST /search/top-ons: the matched food's panel with top-ons added.
#[instrument(skip(state, payload))]
pub async fn search_with_top_ons(
    State(state): State<AppState>,
    Json(payload): Json<TopOnsRequest>,
) -> Result<Json<TopOnsResponse>, AppError> {
    let query = normalize_query(payload.query.as_deref())?;
    if payload.daily_values.as_ref().is_some_and(|dv| !dv.is_valid()) {
        return Err(AppError::BadRequest(
            "dailyValues must be positive numbers".into(),
        ));
    }

    let mut selected = Vec::with_capacity(payload.top_ons.len());
    for choice in &payload.top_ons {
        let top_on = find_top_on(&choice.id)
            .ok_or_else(|| AppError::BadRequest(format!("unknown top-on: {}", choice.id)))?;
        if !choice.quantity.is_finite() || choice.quantity <= 0.0 {
            return Err(AppError::BadRequest(format!(
                "quantity for {} must be positive",
                choice.id
            )));
        }
        selected.push(top_on_nutrition(top_on, choice.quantity));
    }

    let foods = state
        .foods
        .all_foods()
        .await
        .map_err(internal("Error searching for food"))?;
    let record = find_best_match(&query, &foods)
        .record()
        .ok_or_else(|| AppError::NotFound("Food not found".into()))?;

    let totals = sum_top_ons(&selected);
    let nutrient_breakdown =
        apply_top_ons(&record.nutrient_breakdown, &totals, payload.daily_values.as_ref());
    debug!(name = %record.name, top_ons = selected.len(), "top-ons applied");

    Ok(Json(TopOnsResponse {
        name: record.name.clone(),
        top_ons: selected,
        totals,
        nutrient_breakdown,
    }))
}

pub async fn list_top_ons() -> Json<&'static [TopOn]> {
    Json(TOP_ONS.as_slice())
}
