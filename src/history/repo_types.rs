use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(()),
        }
    }
}

/// One logged food, with values already multiplied by the portion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub portion_multiplier: f64,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user_id: String,
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub portion_multiplier: f64,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct HistoryRow {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub portion_multiplier: f64,
    pub meal_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = anyhow::Error;

    fn try_from(r: HistoryRow) -> Result<Self, Self::Error> {
        let meal_type = r
            .meal_type
            .as_deref()
            .map(|m| m.parse().map_err(|_| anyhow!("stored meal type {m:?} is not recognised")))
            .transpose()?;
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            calories: r.calories,
            carbs: r.carbs,
            protein: r.protein,
            fat: r.fat,
            portion_multiplier: r.portion_multiplier,
            meal_type,
            notes: r.notes,
            created_at: r.created_at,
        })
    }
}
