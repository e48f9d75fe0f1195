//! Amounts embedded in free-text nutrient info, e.g. `"34g (12% DV)"`.
//!
//! The source data always leads with the amount; the unit is a textual
//! convention and is never converted.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::repo_types::NutrientEntry;

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+(?:\.\d+)?)").unwrap();
    static ref GRAMS: Regex = Regex::new(r"(\d+\.?\d*)g").unwrap();
}

/// First leading number of `text`, 0 when it does not start with one.
pub fn leading_amount(text: &str) -> f64 {
    LEADING_NUMBER
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0.0)
}

/// First `<number>g` token anywhere in `text`, 0 when absent.
pub fn grams_amount(text: &str) -> f64 {
    GRAMS
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroGrams {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroGrams {
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            carbs: self.carbs * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
        }
    }
}

/// Per-serving macros from a nutrient panel. Saturated fat is not total fat;
/// a later matching line overrides an earlier one.
pub fn extract_macros(breakdown: &[NutrientEntry]) -> MacroGrams {
    let mut macros = MacroGrams::default();
    for entry in breakdown {
        let label = entry.nutrient_label.to_lowercase();
        let amount = leading_amount(&entry.info_text);
        if label.contains("carb") {
            macros.carbs = amount;
        } else if label.contains("protein") {
            macros.protein = amount;
        } else if label.contains("fat") && !label.contains("saturated") {
            macros.fat = amount;
        }
    }
    macros
}
