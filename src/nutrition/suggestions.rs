//! Typical height/weight ranges by age bracket, used to pre-fill profile inputs.
//! Advisory content only; the numbers are a fixed table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Height,
    Weight,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeSuggestion {
    pub min: u32,
    pub max: u32,
    /// Rounded middle of the range, offered as a one-tap pre-fill.
    pub midpoint: u32,
    pub unit: &'static str,
    pub age_group_label: &'static str,
}

fn midpoint(min: u32, max: u32) -> u32 {
    ((f64::from(min) + f64::from(max)) / 2.0).round() as u32
}

struct AgeBracket {
    /// Exclusive upper age bound; `None` for the open-ended adult bracket.
    below: Option<u32>,
    label: &'static str,
    height_cm: (u32, u32),
    weight_kg: (u32, u32),
}

// Under-13s share one range, as do teens; the finer labels only split them.
const BRACKETS: [AgeBracket; 5] = [
    AgeBracket { below: Some(10), label: "children", height_cm: (120, 160), weight_kg: (25, 60) },
    AgeBracket { below: Some(13), label: "preteens", height_cm: (120, 160), weight_kg: (25, 60) },
    AgeBracket { below: Some(16), label: "young teens", height_cm: (150, 180), weight_kg: (40, 90) },
    AgeBracket { below: Some(18), label: "older teens", height_cm: (150, 180), weight_kg: (40, 90) },
    AgeBracket { below: None, label: "adults", height_cm: (150, 200), weight_kg: (45, 120) },
];

pub fn age_group_range_suggestion(age: u32, kind: MeasurementKind) -> RangeSuggestion {
    let bracket = BRACKETS
        .iter()
        .find(|b| b.below.map_or(true, |limit| age < limit))
        .unwrap_or(&BRACKETS[BRACKETS.len() - 1]);

    let ((min, max), unit) = match kind {
        MeasurementKind::Height => (bracket.height_cm, "cm"),
        MeasurementKind::Weight => (bracket.weight_kg, "kg"),
    };
    RangeSuggestion {
        min,
        max,
        midpoint: midpoint(min, max),
        unit,
        age_group_label: bracket.label,
    }
}
