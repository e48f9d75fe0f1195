use anyhow::anyhow;
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::nutrition::calculator::{
    ActivityLevel, DailyNutritionTargets, Sex, UserHealthProfile,
};

/// Stored health profile together with the targets computed from it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub daily_calories: i64,
    pub daily_carbs: i64,
    pub daily_protein: i64,
    pub daily_fat: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl UserProfile {
    pub fn targets(&self) -> DailyNutritionTargets {
        DailyNutritionTargets {
            calories: self.daily_calories,
            carbs_grams: self.daily_carbs,
            protein_grams: self.daily_protein,
            fat_grams: self.daily_fat,
        }
    }
}

/// Write model for an insert-or-update.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub health: UserHealthProfile,
    pub targets: DailyNutritionTargets,
}

#[derive(Debug, FromRow)]
pub struct ProfileRow {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: i32,
    pub sex: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub daily_calories: i64,
    pub daily_carbs: i64,
    pub daily_protein: i64,
    pub daily_fat: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = anyhow::Error;

    fn try_from(r: ProfileRow) -> Result<Self, Self::Error> {
        let sex = r
            .sex
            .parse()
            .map_err(|_| anyhow!("stored sex {:?} is not recognised", r.sex))?;
        let activity_level = r
            .activity_level
            .parse()
            .map_err(|_| anyhow!("stored activity level {:?} is not recognised", r.activity_level))?;
        Ok(Self {
            user_id: r.user_id,
            first_name: r.first_name,
            last_name: r.last_name,
            age: u32::try_from(r.age)?,
            sex,
            height_cm: r.height_cm,
            weight_kg: r.weight_kg,
            activity_level,
            daily_calories: r.daily_calories,
            daily_carbs: r.daily_carbs,
            daily_protein: r.daily_protein,
            daily_fat: r.daily_fat,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProfileRow {
        ProfileRow {
            user_id: "user-1".into(),
            first_name: Some("Ama".into()),
            last_name: None,
            age: 30,
            sex: "female".into(),
            height_cm: 165.0,
            weight_kg: 60.0,
            activity_level: "very_active".into(),
            daily_calories: 2400,
            daily_carbs: 300,
            daily_protein: 120,
            daily_fat: 80,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn row_converts_to_profile() {
        let profile = UserProfile::try_from(row()).expect("valid row");
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.targets().protein_grams, 120);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["activityLevel"], "very_active");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn unknown_enum_in_row_is_an_error() {
        let bad = ProfileRow {
            activity_level: "hyperactive".into(),
            ..row()
        };
        assert!(UserProfile::try_from(bad).is_err());
    }
}
