use serde::Deserialize;
use thiserror::Error;

use super::calculator::{ActivityLevel, Sex, UserHealthProfile};

pub const AGE_RANGE: (f64, f64) = (1.0, 120.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (10.0, 300.0);

/// Profile fields as submitted by a client, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHealthProfile {
    pub age: Option<f64>,
    #[serde(alias = "gender")]
    pub sex: Option<String>,
    #[serde(alias = "height")]
    pub height_cm: Option<f64>,
    #[serde(alias = "weight")]
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("Please enter a valid age (1-120 years).")]
    Age,
    #[error("Please enter a valid height (50-250 cm).")]
    Height,
    #[error("Please enter a valid weight (10-300 kg).")]
    Weight,
    #[error("sex must be one of: male, female")]
    Sex,
    #[error("activityLevel must be one of: sedentary, lightly_active, moderately_active, very_active, extra_active")]
    ActivityLevel,
}

impl ValidationError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } => field,
            ValidationError::Age => "age",
            ValidationError::Height => "heightCm",
            ValidationError::Weight => "weightKg",
            ValidationError::Sex => "sex",
            ValidationError::ActivityLevel => "activityLevel",
        }
    }
}

fn within(value: f64, (min, max): (f64, f64)) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Gate in front of the calculator: every field present, every value in domain.
pub fn validate_profile(raw: &RawHealthProfile) -> Result<UserHealthProfile, ValidationError> {
    let age = raw.age.ok_or(ValidationError::Missing { field: "age" })?;
    let sex = raw
        .sex
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::Missing { field: "sex" })?;
    let height_cm = raw.height_cm.ok_or(ValidationError::Missing { field: "heightCm" })?;
    let weight_kg = raw.weight_kg.ok_or(ValidationError::Missing { field: "weightKg" })?;
    let activity_level = raw
        .activity_level
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::Missing { field: "activityLevel" })?;

    if !within(age, AGE_RANGE) || age.fract() != 0.0 {
        return Err(ValidationError::Age);
    }
    if !within(height_cm, HEIGHT_CM_RANGE) {
        return Err(ValidationError::Height);
    }
    if !within(weight_kg, WEIGHT_KG_RANGE) {
        return Err(ValidationError::Weight);
    }
    let sex: Sex = sex.parse().map_err(|_| ValidationError::Sex)?;
    let activity_level: ActivityLevel = activity_level
        .parse()
        .map_err(|_| ValidationError::ActivityLevel)?;

    Ok(UserHealthProfile {
        age: age as u32,
        sex,
        height_cm,
        weight_kg,
        activity_level,
    })
}
