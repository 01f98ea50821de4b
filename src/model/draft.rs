use super::{Difficulty, Recipe};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// Errors returned when a draft is not ready to become a recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Recipe needs at least one ingredient")]
    NoIngredients,

    #[error("Recipe needs at least one instruction step")]
    NoInstructions,

    #[error("Servings must be at least 1")]
    InvalidServings,

    #[error("Invalid image URL {url}: {reason}")]
    InvalidImageUrl { url: String, reason: String },
}

/// The state of the add-recipe form.
///
/// A draft is everything a recipe has except the identifier and the
/// timestamps, which the store assigns on creation. Drafts are freely
/// editable; [`RecipeDraft::validate`] decides whether one may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    /// Raw image URL input. Blank means no image.
    pub image_url: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        RecipeDraft {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            difficulty: Difficulty::Easy,
            image_url: String::new(),
        }
    }
}

impl RecipeDraft {
    /// Appends a blank ingredient row.
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(String::new());
    }

    /// Replaces the ingredient row at `index`. Out-of-range indices are ignored.
    pub fn update_ingredient(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.ingredients.get_mut(index) {
            *row = value.into();
        }
    }

    /// Removes the ingredient row at `index`, keeping at least one row.
    pub fn remove_ingredient(&mut self, index: usize) {
        remove_row(&mut self.ingredients, index);
    }

    /// Appends a blank instruction step.
    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    /// Replaces the instruction step at `index`. Out-of-range indices are ignored.
    pub fn update_instruction(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.instructions.get_mut(index) {
            *row = value.into();
        }
    }

    /// Removes the instruction step at `index`, keeping at least one step.
    pub fn remove_instruction(&mut self, index: usize) {
        remove_row(&mut self.instructions, index);
    }

    /// Checks the draft and normalizes it for submission.
    ///
    /// Text fields are trimmed, blank ingredient and instruction rows are
    /// dropped, and a blank image URL becomes no image.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] if:
    /// - the title, category or description is blank
    /// - no ingredient or no instruction remains after dropping blank rows
    /// - servings is zero
    /// - the image URL is present but not an absolute URL
    pub fn validate(self) -> Result<ValidDraft, DraftError> {
        let title = required(self.title, "title")?;
        let category = required(self.category, "category")?;
        let description = required(self.description, "description")?;

        let ingredients = non_blank_rows(self.ingredients);
        if ingredients.is_empty() {
            return Err(DraftError::NoIngredients);
        }
        let instructions = non_blank_rows(self.instructions);
        if instructions.is_empty() {
            return Err(DraftError::NoInstructions);
        }

        if self.servings == 0 {
            return Err(DraftError::InvalidServings);
        }

        let image_url = match self.image_url.trim() {
            "" => None,
            raw => {
                Url::parse(raw).map_err(|e| DraftError::InvalidImageUrl {
                    url: raw.to_string(),
                    reason: e.to_string(),
                })?;
                Some(raw.to_string())
            }
        };

        Ok(ValidDraft {
            title,
            category,
            description,
            ingredients,
            instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            image_url,
        })
    }
}

/// A draft that passed validation and can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    title: String,
    category: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    difficulty: Difficulty,
    image_url: Option<String>,
}

impl ValidDraft {
    /// Turns the draft into a recipe created at `now`.
    pub(crate) fn into_recipe(self, id: String, now: DateTime<Utc>) -> Recipe {
        Recipe {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parses a minutes input field. Anything that does not start with a
/// non-negative integer counts as 0.
pub fn parse_minutes(input: &str) -> u32 {
    leading_integer(input).unwrap_or(0)
}

/// Parses a servings input field. Anything that does not start with a
/// positive integer counts as 1.
pub fn parse_servings(input: &str) -> u32 {
    leading_integer(input).filter(|n| *n > 0).unwrap_or(1)
}

fn leading_integer(input: &str) -> Option<u32> {
    static LEADING_DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_DIGITS.get_or_init(|| Regex::new(r"^\s*\+?(\d+)").expect("valid regex"));
    re.captures(input)?.get(1)?.as_str().parse().ok()
}

fn required(value: String, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_blank_rows(rows: Vec<String>) -> Vec<String> {
    rows.into_iter()
        .map(|row| row.trim().to_string())
        .filter(|row| !row.is_empty())
        .collect()
}

fn remove_row(rows: &mut Vec<String>, index: usize) {
    if rows.len() > 1 && index < rows.len() {
        rows.remove(index);
    }
}
