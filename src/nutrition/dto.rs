use serde::{Deserialize, Serialize};

use super::calculator::{compute_weekly, DailyNutritionTargets, WeeklyNutritionTargets};
use super::suggestions::MeasurementKind;

#[derive(Debug, Serialize)]
pub struct TargetsResponse {
    pub daily: DailyNutritionTargets,
    pub weekly: WeeklyNutritionTargets,
}

impl From<DailyNutritionTargets> for TargetsResponse {
    fn from(daily: DailyNutritionTargets) -> Self {
        Self {
            weekly: compute_weekly(&daily),
            daily,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub age: u32,
    pub kind: MeasurementKind,
}
