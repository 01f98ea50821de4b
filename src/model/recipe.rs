use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How demanding a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// A single recipe in the catalog.
///
/// The serialized form uses the column names of the hosted recipe table
/// (`prep_time`, `cook_time`, `image_url`, `created_at`, `updated_at`), so
/// rows exported from it load without a mapping layer.
///
/// Recipes are only ever built by a [`RecipeStore`](crate::store::RecipeStore),
/// which owns id and timestamp assignment, or deserialized from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    /// Name of the [`Category`](super::Category) this recipe is listed under.
    ///
    /// Matched against category names by exact string equality; nothing
    /// checks that the category exists.
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Preparation plus cooking time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// Builds a recipe with fixed timestamps for tests.
    pub(crate) fn recipe(
        id: &str,
        title: &str,
        category: &str,
        description: &str,
        ingredients: &[&str],
    ) -> Recipe {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["Bake".to_string()],
            prep_time: 15,
            cook_time: 10,
            servings: 24,
            difficulty: Difficulty::Easy,
            image_url: None,
            created_at: at,
            updated_at: at,
        }
    }

    /// The two-recipe collection used throughout the filter tests.
    pub(crate) fn cookies_and_pie() -> Vec<Recipe> {
        vec![
            recipe(
                "1",
                "Chocolate Chip Cookies",
                "Cookies",
                "classic",
                &["chocolate chips", "flour"],
            ),
            recipe("2", "Apple Pie", "Pies", "fruity", &["apples", "sugar"]),
        ]
    }
}
