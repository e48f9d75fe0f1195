use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use super::nutrients::leading_amount;

/// One line of a food's nutrient panel, e.g. `{"nutrient":"Protein","info":"13g (26% DV)"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    #[serde(rename = "nutrient", default)]
    pub nutrient_label: String,
    #[serde(rename = "info", default)]
    pub info_text: String,
    #[serde(rename = "percentDailyValue", default)]
    pub daily_value_percent: Option<f64>,
    #[serde(rename = "color", default)]
    pub display_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledNote {
    pub title: String,
    pub info: String,
}

/// Searchable food entry. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: Uuid,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub num_calories: String,
    pub digestion_time: String,
    pub time_to_eat: String,
    pub digestion_complexity: String,
    pub additional_digestion_notes: String,
    pub benefits: Vec<TitledNote>,
    pub cautions: Vec<TitledNote>,
    pub nutrient_breakdown: Vec<NutrientEntry>,
}

impl FoodRecord {
    /// Calories per serving, taken from the leading number of `num_calories`.
    pub fn calories_per_serving(&self) -> f64 {
        leading_amount(&self.num_calories)
    }
}

#[derive(Debug, FromRow)]
pub struct FoodRow {
    pub id: Uuid,
    pub name: String,
    pub other_names: Json<Vec<String>>,
    pub num_calories: String,
    pub digestion_time: String,
    pub time_to_eat: String,
    pub digestion_complexity: String,
    pub additional_digestion_notes: String,
    pub benefits: Json<Vec<TitledNote>>,
    pub cautions: Json<Vec<TitledNote>>,
    pub nutrient_breakdown: Json<Vec<NutrientEntry>>,
}

impl From<FoodRow> for FoodRecord {
    fn from(r: FoodRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            alternate_names: r.other_names.0,
            num_calories: r.num_calories,
            digestion_time: r.digestion_time,
            time_to_eat: r.time_to_eat,
            digestion_complexity: r.digestion_complexity,
            additional_digestion_notes: r.additional_digestion_notes,
            benefits: r.benefits.0,
            cautions: r.cautions.0,
            nutrient_breakdown: r.nutrient_breakdown.0,
        }
    }
}
