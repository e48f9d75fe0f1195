//! Protein "top-ons" added on top of a base dish, and how they shift the
//! dish's nutrient panel.

use serde::{Deserialize, Serialize};

use super::nutrients::grams_amount;
use super::repo_types::NutrientEntry;

/// Grams per portion of any top-on.
pub const PORTION_GRAMS: f64 = 50.0;

/// Nutrition per 100 g.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TopOn {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

const fn top_on(
    id: &'static str,
    name: &'static str,
    calories: f64,
    protein: f64,
    fats: f64,
    carbohydrates: f64,
) -> TopOn {
    TopOn { id, name, calories, protein, fats, carbohydrates }
}

pub static TOP_ONS: [TopOn; 12] = [
    top_on("egg", "Egg", 72.0, 6.0, 5.0, 1.0),
    top_on("chicken", "Chicken", 211.0, 25.8, 10.0, 0.0),
    top_on("fish", "Fish", 280.0, 39.2, 12.5, 0.0),
    top_on("cow_meat", "Cow Meat", 217.0, 26.1, 11.8, 0.0),
    top_on("wele", "Wele (Cow Skin)", 224.6, 46.9, 1.09, 6.8),
    top_on("snail", "Snail", 90.0, 16.1, 1.4, 2.0),
    top_on("sausage", "Sausage", 268.0, 27.0, 18.0, 1.6),
    top_on("crab", "Crab", 83.0, 17.8, 0.7, 0.0),
    top_on("goat_meat", "Goat Meat", 122.0, 23.0, 2.6, 0.0),
    top_on("pork", "Pork", 292.0, 25.7, 20.8, 0.0),
    top_on("gizzard", "Gizzard", 154.0, 30.3, 3.7, 0.0),
    top_on("liver", "Liver", 125.0, 15.5, 4.0, 4.8),
];

pub fn find_top_on(id: &str) -> Option<&'static TopOn> {
    TOP_ONS.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTopOn {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_fats: f64,
    pub total_carbs: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct TopOnsNutrition {
    pub calories: f64,
    pub protein: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

/// Daily reference amounts in grams for %DV.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyValues {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
}

impl DailyValues {
    /// Every value is a finite amount above zero.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbohydrates, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// FDA reference values for a 2000 kcal diet.
pub const DEFAULT_DAILY_VALUES: DailyValues = DailyValues {
    protein: 50.0,
    carbohydrates: 300.0,
    fats: 65.0,
};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn top_on_nutrition(top_on: &TopOn, quantity: f64) -> SelectedTopOn {
    let factor = PORTION_GRAMS * quantity / 100.0;
    SelectedTopOn {
        id: top_on.id.to_string(),
        name: top_on.name.to_string(),
        quantity,
        total_calories: (top_on.calories * factor).round(),
        total_protein: round_to(top_on.protein * factor, 1),
        total_fats: round_to(top_on.fats * factor, 1),
        total_carbs: round_to(top_on.carbohydrates * factor, 1),
    }
}

pub fn sum_top_ons(selected: &[SelectedTopOn]) -> TopOnsNutrition {
    let totals = selected.iter().fold(TopOnsNutrition::default(), |acc, t| TopOnsNutrition {
        calories: acc.calories + t.total_calories,
        protein: acc.protein + t.total_protein,
        fats: acc.fats + t.total_fats,
        carbohydrates: acc.carbohydrates + t.total_carbs,
    });
    TopOnsNutrition {
        calories: totals.calories.round(),
        protein: round_to(totals.protein, 2),
        fats: round_to(totals.fats, 2),
        carbohydrates: round_to(totals.carbohydrates, 2),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Macro {
    Protein,
    Fats,
    Carbohydrates,
}

impl Macro {
    fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "protein" => Some(Macro::Protein),
            "fat" | "fats" => Some(Macro::Fats),
            "carbohydrate" | "carbohydrates" | "carbs" => Some(Macro::Carbohydrates),
            _ => None,
        }
    }

    fn pick(self, values: &DailyValues) -> f64 {
        match self {
            Macro::Protein => values.protein,
            Macro::Fats => values.fats,
            Macro::Carbohydrates => values.carbohydrates,
        }
    }

    fn added(self, top_ons: &TopOnsNutrition) -> f64 {
        match self {
            Macro::Protein => top_ons.protein,
            Macro::Fats => top_ons.fats,
            Macro::Carbohydrates => top_ons.carbohydrates,
        }
    }
}

pub fn percent_daily_value(grams: f64, daily_value: f64) -> f64 {
    (grams / daily_value * 100.0).round()
}

/// Adds top-on grams to the protein, fat and carbohydrate lines of a panel and
/// recomputes their %DV. Other lines are returned untouched.
pub fn apply_top_ons(
    breakdown: &[NutrientEntry],
    top_ons: &TopOnsNutrition,
    daily_values: Option<&DailyValues>,
) -> Vec<NutrientEntry> {
    let values = daily_values.unwrap_or(&DEFAULT_DAILY_VALUES);
    breakdown
        .iter()
        .map(|entry| {
            let Some(kind) = Macro::from_label(&entry.nutrient_label) else {
                return entry.clone();
            };
            let grams = grams_amount(&entry.info_text) + kind.added(top_ons);
            let percent = percent_daily_value(grams, kind.pick(values));
            NutrientEntry {
                info_text: format!("{grams:.1}g ({percent}% DV)"),
                daily_value_percent: Some(percent),
                ..entry.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, info: &str) -> NutrientEntry {
        NutrientEntry {
            nutrient_label: label.into(),
            info_text: info.into(),
            daily_value_percent: Some(1.0),
            display_color: Some("#ff0000".into()),
        }
    }

    #[test]
    fn one_portion_is_half_of_per_100g() {
        let egg = find_top_on("egg").unwrap();
        let t = top_on_nutrition(egg, 1.0);
        assert_eq!(t.total_calories, 36.0);
        assert_eq!(t.total_protein, 3.0);
        assert_eq!(t.total_fats, 2.5);
        assert_eq!(t.total_carbs, 0.5);
    }

    #[test]
    fn portions_scale_and_round() {
        let wele = find_top_on("wele").unwrap();
        let t = top_on_nutrition(wele, 2.0);
        assert_eq!(t.total_calories, 225.0);
        assert_eq!(t.total_protein, 46.9);
        assert_eq!(t.total_fats, 1.1);
        assert_eq!(t.total_carbs, 6.8);
        assert!(find_top_on("tofu").is_none());
    }

    #[test]
    fn sum_of_selected_top_ons() {
        let selected = vec![
            top_on_nutrition(find_top_on("egg").unwrap(), 2.0),
            top_on_nutrition(find_top_on("chicken").unwrap(), 1.0),
        ];
        let totals = sum_top_ons(&selected);
        assert_eq!(totals.calories, 178.0);
        assert_eq!(totals.protein, 18.9);
        assert_eq!(totals.fats, 10.0);
        assert_eq!(totals.carbohydrates, 1.0);
        assert_eq!(sum_top_ons(&[]), TopOnsNutrition::default());
    }

    #[test]
    fn apply_updates_macro_lines_only() {
        let breakdown = vec![
            entry("Protein", "13g (26% DV)"),
            entry("Fats", "11g (17% DV)"),
            entry("Carbs", "34g (11% DV)"),
            entry("Sodium", "400mg (17% DV)"),
        ];
        let top_ons = TopOnsNutrition {
            calories: 72.0,
            protein: 6.0,
            fats: 5.0,
            carbohydrates: 1.0,
        };
        let updated = apply_top_ons(&breakdown, &top_ons, None);

        assert_eq!(updated[0].info_text, "19.0g (38% DV)");
        assert_eq!(updated[0].daily_value_percent, Some(38.0));
        assert_eq!(updated[0].display_color.as_deref(), Some("#ff0000"));
        assert_eq!(updated[1].info_text, "16.0g (25% DV)");
        assert_eq!(updated[2].info_text, "35.0g (12% DV)");
        assert_eq!(updated[3], breakdown[3]);
    }

    #[test]
    fn daily_values_must_be_positive() {
        assert!(DEFAULT_DAILY_VALUES.is_valid());
        let zero = DailyValues {
            protein: 0.0,
            ..DEFAULT_DAILY_VALUES
        };
        assert!(!zero.is_valid());
        let negative = DailyValues {
            fats: -65.0,
            ..DEFAULT_DAILY_VALUES
        };
        assert!(!negative.is_valid());
    }

    #[test]
    fn personalised_daily_values_change_percentages() {
        let breakdown = vec![entry("protein", "10g")];
        let values = DailyValues {
            protein: 138.0,
            carbohydrates: 345.0,
            fats: 92.0,
        };
        let updated = apply_top_ons(&breakdown, &TopOnsNutrition::default(), Some(&values));
        assert_eq!(updated[0].info_text, "10.0g (7% DV)");
    }
}
