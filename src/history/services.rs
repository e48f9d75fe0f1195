use serde::Serialize;
use time::{Date, Duration, OffsetDateTime};

use super::repo_types::HistoryEntry;
use crate::{
    foods::{
        nutrients::{extract_macros, MacroGrams},
        ranker::{find_best_match, SearchOutcome},
        repo_types::FoodRecord,
    },
    nutrition::calculator::{DailyNutritionTargets, WeeklyNutritionTargets},
};

/// `[start, end)` of a UTC calendar day. `None` at the edge of the
/// representable calendar.
pub fn day_bounds(date: Date) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let start = date.midnight().assume_utc();
    Some((start, start.checked_add(Duration::days(1))?))
}

/// Sunday of the week containing `date`.
pub fn week_start(date: Date) -> Option<Date> {
    date.checked_sub(Duration::days(i64::from(
        date.weekday().number_days_from_sunday(),
    )))
}

/// Saturday closing the week that starts on `start`.
pub fn week_end(start: Date) -> Option<Date> {
    start.checked_add(Duration::days(6))
}

/// `[sunday 00:00, next sunday 00:00)` in UTC.
pub fn week_bounds(date: Date) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let start = week_start(date)?.midnight().assume_utc();
    Some((start, start.checked_add(Duration::weeks(1))?))
}

/// Values to store for one logged food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNutrition {
    pub calories: f64,
    pub macros: MacroGrams,
    pub matched: bool,
}

/// Looks `food_name` up with the search ranker. A match contributes its
/// calories and macros scaled by `portion`; otherwise only the caller's
/// calorie figure is kept, unscaled.
pub fn resolve_nutrition(
    food_name: &str,
    fallback_calories: Option<f64>,
    portion: f64,
    foods: &[FoodRecord],
) -> ResolvedNutrition {
    match find_best_match(food_name, foods) {
        SearchOutcome::Found(found) => ResolvedNutrition {
            calories: found.record.calories_per_serving() * portion,
            macros: extract_macros(&found.record.nutrient_breakdown).scale(portion),
            matched: true,
        },
        SearchOutcome::NotFound => ResolvedNutrition {
            calories: fallback_calories.unwrap_or(0.0),
            macros: MacroGrams::default(),
            matched: false,
        },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeTotals {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub food_count: usize,
}

impl IntakeTotals {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, e| Self {
            calories: acc.calories + e.calories,
            carbs: acc.carbs + e.carbs,
            protein: acc.protein + e.protein,
            fat: acc.fat + e.fat,
            food_count: acc.food_count + 1,
        })
    }
}

/// Whole-number percent of `target`; 0 when there is no target.
pub fn percentage(actual: f64, target: i64) -> i64 {
    if target <= 0 {
        return 0;
    }
    (actual / target as f64 * 100.0).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub calories_percentage: i64,
    pub carbs_percentage: i64,
    pub protein_percentage: i64,
    pub fat_percentage: i64,
}

impl Progress {
    fn compare(actual: &IntakeTotals, calories: i64, carbs: i64, protein: i64, fat: i64) -> Self {
        Self {
            calories_percentage: percentage(actual.calories, calories),
            carbs_percentage: percentage(actual.carbs, carbs),
            protein_percentage: percentage(actual.protein, protein),
            fat_percentage: percentage(actual.fat, fat),
        }
    }

    pub fn daily(actual: &IntakeTotals, t: &DailyNutritionTargets) -> Self {
        Self::compare(actual, t.calories, t.carbs_grams, t.protein_grams, t.fat_grams)
    }

    pub fn weekly(actual: &IntakeTotals, t: &WeeklyNutritionTargets) -> Self {
        Self::compare(actual, t.calories, t.carbs_grams, t.protein_grams, t.fat_grams)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};
    use uuid::Uuid;

    use super::*;
    use crate::nutrition::calculator::compute_weekly;
    use crate::testing::{food, food_with_panel};

    fn entry(calories: f64, carbs: f64, protein: f64, fat: f64) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4(),
            user_id: "u".into(),
            name: "x".into(),
            calories,
            carbs,
            protein,
            fat,
            portion_multiplier: 1.0,
            meal_type: None,
            notes: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn day_is_utc_midnight_to_midnight() {
        let (start, end) = day_bounds(date!(2024 - 03 - 05)).unwrap();
        assert_eq!(start, datetime!(2024-03-05 0:00 UTC));
        assert_eq!(end, datetime!(2024-03-06 0:00 UTC));
    }

    #[test]
    fn last_representable_day_has_no_bounds() {
        assert!(day_bounds(date!(9999 - 12 - 31)).is_none());
        assert!(week_bounds(date!(9999 - 12 - 30)).is_none());
        assert!(day_bounds(date!(9999 - 12 - 30)).is_some());
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-03-06 is a Wednesday
        assert_eq!(week_start(date!(2024 - 03 - 06)), Some(date!(2024 - 03 - 03)));
        assert_eq!(week_start(date!(2024 - 03 - 03)), Some(date!(2024 - 03 - 03)));
        assert_eq!(week_start(date!(2024 - 03 - 09)), Some(date!(2024 - 03 - 03)));
        assert_eq!(week_end(date!(2024 - 03 - 03)), Some(date!(2024 - 03 - 09)));

        let (start, end) = week_bounds(date!(2024 - 03 - 01)).unwrap();
        assert_eq!(start, datetime!(2024-02-25 0:00 UTC));
        assert_eq!(end, datetime!(2024-03-03 0:00 UTC));
    }

    #[test]
    fn matched_food_is_scaled_by_portion() {
        let mut banku = food_with_panel(
            "Banku",
            &[("Carbohydrates", "60g"), ("Protein", "4g"), ("Fat", "1.5g")],
        );
        banku.num_calories = "300 kcal per ball".into();

        let resolved = resolve_nutrition("banku", Some(999.0), 0.5, &[banku]);
        assert!(resolved.matched);
        assert_eq!(resolved.calories, 150.0);
        assert_eq!(resolved.macros.carbs, 30.0);
        assert_eq!(resolved.macros.protein, 2.0);
        assert_eq!(resolved.macros.fat, 0.75);
    }

    #[test]
    fn unmatched_food_keeps_given_calories_only() {
        let foods = [food("Banku", &[])];
        let resolved = resolve_nutrition("pizza", Some(420.0), 2.0, &foods);
        assert!(!resolved.matched);
        assert_eq!(resolved.calories, 420.0);
        assert_eq!(resolved.macros, MacroGrams::default());

        assert_eq!(resolve_nutrition("pizza", None, 1.0, &foods).calories, 0.0);
    }

    #[test]
    fn totals_and_progress() {
        let totals = IntakeTotals::from_entries(&[
            entry(500.0, 60.0, 20.0, 10.0),
            entry(700.0, 90.0, 49.0, 36.0),
        ]);
        assert_eq!(totals.food_count, 2);
        assert_eq!(totals.calories, 1200.0);

        let targets = DailyNutritionTargets {
            calories: 2400,
            carbs_grams: 300,
            protein_grams: 0,
            fat_grams: 92,
        };
        let progress = Progress::daily(&totals, &targets);
        assert_eq!(progress.calories_percentage, 50);
        assert_eq!(progress.carbs_percentage, 50);
        assert_eq!(progress.protein_percentage, 0);
        assert_eq!(progress.fat_percentage, 50);

        let weekly = Progress::weekly(&totals, &compute_weekly(&targets));
        assert_eq!(weekly.calories_percentage, 7);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1.0, 8), 13);
        assert_eq!(percentage(0.0, 0), 0);
        assert_eq!(percentage(300.0, 200), 150);
    }
}
