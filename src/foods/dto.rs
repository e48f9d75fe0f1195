use serde::{Deserialize, Serialize};

use super::{
    nutrients::MacroGrams,
    repo_types::{FoodRecord, NutrientEntry, TitledNote},
    topons::{DailyValues, SelectedTopOn, TopOnsNutrition},
};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

impl SearchQuery {
    pub fn normalized(&self) -> Result<String, AppError> {
        normalize_query(self.query.as_deref())
    }
}

pub fn normalize_query(raw: Option<&str>) -> Result<String, AppError> {
    match raw.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(AppError::BadRequest("query is required".into())),
    }
}

/// Search response, one food with its per-serving macros pulled out of the panel.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    pub name: String,
    pub num_calories: String,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub digestion_time: String,
    pub time_to_eat: String,
    pub digestion_complexity: String,
    pub additional_digestion_notes: String,
    pub benefits: Vec<TitledNote>,
    pub cautions: Vec<TitledNote>,
    pub nutrient_breakdown: Vec<NutrientEntry>,
}

impl FoodDetails {
    pub fn new(record: &FoodRecord, macros: MacroGrams) -> Self {
        Self {
            name: record.name.clone(),
            num_calories: record.num_calories.clone(),
            carbs: macros.carbs,
            protein: macros.protein,
            fat: macros.fat,
            digestion_time: record.digestion_time.clone(),
            time_to_eat: record.time_to_eat.clone(),
            digestion_complexity: record.digestion_complexity.clone(),
            additional_digestion_notes: record.additional_digestion_notes.clone(),
            benefits: record.benefits.clone(),
            cautions: record.cautions.clone(),
            nutrient_breakdown: record.nutrient_breakdown.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TopOnSelection {
    pub id: String,
    pub quantity: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOnsRequest {
    pub query: Option<String>,
    #[serde(default)]
    pub top_ons: Vec<TopOnSelection>,
    pub daily_values: Option<DailyValues>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopOnsResponse {
    pub name: String,
    pub top_ons: Vec<SelectedTopOn>,
    pub totals: TopOnsNutrition,
    pub nutrient_breakdown: Vec<NutrientEntry>,
}
