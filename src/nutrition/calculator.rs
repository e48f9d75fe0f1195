use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Biological sex, selects the BMR constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier applied on top of the BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,         // little or no exercise
            ActivityLevel::LightlyActive => 1.375,   // 1-3 days/week
            ActivityLevel::ModeratelyActive => 1.55, // 3-5 days/week
            ActivityLevel::VeryActive => 1.725,      // 6-7 days/week
            ActivityLevel::ExtraActive => 1.9,       // hard exercise & physical job
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or(())
    }
}

/// Validated biometric input. Build it through `validation::validate_profile`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserHealthProfile {
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionTargets {
    pub calories: i64,
    pub carbs_grams: i64,
    pub protein_grams: i64,
    pub fat_grams: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNutritionTargets {
    pub calories: i64,
    pub carbs_grams: i64,
    pub protein_grams: i64,
    pub fat_grams: i64,
}

const CARBS_SHARE: f64 = 0.5;
const PROTEIN_SHARE: f64 = 0.2;
const FAT_SHARE: f64 = 0.3;

const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Mifflin-St Jeor basal metabolic rate, kcal/day.
pub fn basal_metabolic_rate(profile: &UserHealthProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn compute_daily_calories(profile: &UserHealthProfile) -> i64 {
    (basal_metabolic_rate(profile) * profile.activity_level.multiplier()).round() as i64
}

/// Fixed 50/20/30 carbs/protein/fat split. Each field is rounded on its own,
/// so the macro energy only approximates `daily_calories`.
pub fn compute_macros(daily_calories: i64) -> DailyNutritionTargets {
    let kcal = daily_calories as f64;
    DailyNutritionTargets {
        calories: daily_calories,
        carbs_grams: (kcal * CARBS_SHARE / KCAL_PER_GRAM_CARBS).round() as i64,
        protein_grams: (kcal * PROTEIN_SHARE / KCAL_PER_GRAM_PROTEIN).round() as i64,
        fat_grams: (kcal * FAT_SHARE / KCAL_PER_GRAM_FAT).round() as i64,
    }
}

pub fn compute_weekly(daily: &DailyNutritionTargets) -> WeeklyNutritionTargets {
    WeeklyNutritionTargets {
        calories: daily.calories * 7,
        carbs_grams: daily.carbs_grams * 7,
        protein_grams: daily.protein_grams * 7,
        fat_grams: daily.fat_grams * 7,
    }
}

pub fn compute_targets(profile: &UserHealthProfile) -> DailyNutritionTargets {
    compute_macros(compute_daily_calories(profile))
}
