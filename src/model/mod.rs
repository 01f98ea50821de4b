//! Catalog data types: recipes, categories and the add-recipe draft.

mod category;
mod draft;
mod recipe;

pub use category::{default_categories, Category, FORM_CATEGORY_CHOICES};
pub use draft::{parse_minutes, parse_servings, DraftError, RecipeDraft, ValidDraft};
pub use recipe::{Difficulty, Recipe, UnknownDifficulty};

#[cfg(test)]
pub(crate) use recipe::fixtures;
