use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument, warn};

use super::{
    calculator::compute_targets,
    dto::{SuggestionQuery, TargetsResponse},
    suggestions::{age_group_range_suggestion, RangeSuggestion},
    validation::{validate_profile, RawHealthProfile},
};
use crate::{error::AppError, state::AppState};

pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition/targets", post(calculate_targets))
        .route("/nutrition/suggestions", get(range_suggestion))
}

/// POST /nutrition/targets: stateless calculator, nothing is stored.
#[instrument(skip(payload))]
pub async fn calculate_targets(
    Json(payload): Json<RawHealthProfile>,
) -> Result<Json<TargetsResponse>, AppError> {
    let profile = validate_profile(&payload).map_err(|e| {
        warn!(field = e.field(), error = %e, "profile rejected");
        e
    })?;
    let daily = compute_targets(&profile);
    debug!(calories = daily.calories, "targets computed");
    Ok(Json(daily.into()))
}

#[instrument]
pub async fn range_suggestion(Query(q): Query<SuggestionQuery>) -> Json<RangeSuggestion> {
    Json(age_group_range_suggestion(q.age, q.kind))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::testing::{call, fake_state};

    #[tokio::test]
    async fn targets_for_reference_profile() {
        let body = serde_json::json!({
            "age": 30,
            "sex": "male",
            "heightCm": 180,
            "weightKg": 80,
            "activityLevel": "moderately_active"
        });
        let (status, json) = call(
            fake_state(vec![]),
            Method::POST,
            "/api/v1/nutrition/targets",
            None,
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["daily"]["calories"], 2759);
        assert_eq!(json["daily"]["carbsGrams"], 345);
        assert_eq!(json["daily"]["proteinGrams"], 138);
        assert_eq!(json["daily"]["fatGrams"], 92);
        assert_eq!(json["weekly"]["calories"], 2759 * 7);
    }

    #[tokio::test]
    async fn invalid_profile_is_rejected_with_field() {
        let body = serde_json::json!({
            "age": 30,
            "sex": "male",
            "heightCm": 180,
            "weightKg": 5,
            "activityLevel": "sedentary"
        });
        let (status, json) = call(
            fake_state(vec![]),
            Method::POST,
            "/api/v1/nutrition/targets",
            None,
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["field"], "weightKg");
    }

    #[tokio::test]
    async fn suggestion_by_age_and_kind() {
        let (status, json) = call(
            fake_state(vec![]),
            Method::GET,
            "/api/v1/nutrition/suggestions?age=14&kind=weight",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["unit"], "kg");
        assert_eq!(json["ageGroupLabel"], "young teens");
        assert_eq!(json["min"], 40);
        assert_eq!(json["midpoint"], 65);
    }
}
