use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, OffsetDateTime};

use super::{
    repo_types::MealType,
    services::{IntakeTotals, Progress},
};
use crate::{
    error::AppError,
    nutrition::calculator::{DailyNutritionTargets, WeeklyNutritionTargets},
};

pub const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    pub food_name: String,
    pub calories: Option<f64>,
    pub portion_multiplier: Option<f64>,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

impl LogFoodRequest {
    pub fn portion(&self) -> Result<f64, AppError> {
        let portion = self.portion_multiplier.unwrap_or(1.0);
        if !portion.is_finite() || portion <= 0.0 {
            return Err(AppError::BadRequest(
                "portionMultiplier must be a positive number".into(),
            ));
        }
        Ok(portion)
    }

    /// Caller's calorie figure, used when the food is not in the store.
    pub fn fallback_calories(&self) -> Result<Option<f64>, AppError> {
        match self.calories {
            Some(c) if !c.is_finite() || c < 0.0 => Err(AppError::BadRequest(
                "calories must be a non-negative number".into(),
            )),
            other => Ok(other),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub to: Option<OffsetDateTime>,
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn limit(&self) -> Result<i64, AppError> {
        match self.limit {
            None => Ok(DEFAULT_LIMIT),
            Some(n) if (1..=MAX_LIMIT).contains(&n) => Ok(n),
            Some(_) => Err(AppError::BadRequest(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    /// The requested `YYYY-MM-DD` day, or today in UTC.
    pub fn date(&self) -> Result<Date, AppError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(OffsetDateTime::now_utc().date()),
            Some(raw) => Date::parse(raw, format_description!("[year]-[month]-[day]"))
                .map_err(|_| AppError::BadRequest("date must be YYYY-MM-DD".into())),
        }
    }
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub totals: IntakeTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<DailyNutritionTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: String,
    pub week_end: String,
    pub totals: IntakeTotals,
    pub average_daily_calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<WeeklyNutritionTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}
