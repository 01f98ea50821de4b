//! Recipe storage.
//!
//! A [`RecipeStore`] holds the authoritative recipe collection and is the
//! only place recipes are created: it validates the draft and assigns the
//! identifier and timestamps. Two backends are provided, an in-memory
//! session store and a directory of JSON files.

use crate::model::{DraftError, Recipe, RecipeDraft, ValidDraft};
use camino::Utf8PathBuf;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

/// Errors that can occur when loading or creating recipes.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid recipe: {0}")]
    InvalidDraft(#[from] DraftError),

    #[error("Failed to access recipe storage: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read recipe {path}: {source}")]
    JsonError {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Invalid recipe path: {0}")]
    InvalidPath(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),
}

/// The authoritative set of recipes.
pub trait RecipeStore {
    /// Validates `draft` and stores it as a new recipe.
    ///
    /// The store assigns the identifier and both timestamps. The new recipe
    /// goes to the front of [`recipes`](RecipeStore::recipes).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDraft`] if the draft fails validation,
    /// or a backend error if the recipe cannot be persisted.
    fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// All recipes, newest first.
    fn recipes(&self) -> &[Recipe];

    /// Looks up a recipe by identifier.
    fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|recipe| recipe.id == id)
    }
}

/// Validates a draft and stamps it with a fresh identity.
fn build_recipe(draft: RecipeDraft) -> Result<Recipe, StoreError> {
    let valid: ValidDraft = draft.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected recipe draft");
    })?;
    Ok(valid.into_recipe(Uuid::new_v4().to_string(), Utc::now()))
}

/// Sorts newest first; recipes created at the same instant are ordered by id.
fn sort_newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Fails if any identifier occurs more than once.
fn check_unique_ids(recipes: &[Recipe]) -> Result<(), StoreError> {
    let mut seen = std::collections::HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(StoreError::DuplicateId(recipe.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::recipe;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_build_recipe_assigns_identity() {
        let mut draft = RecipeDraft::default();
        draft.title = "Fudge Brownies".to_string();
        draft.category = "Brownies".to_string();
        draft.description = "Dense".to_string();
        draft.update_ingredient(0, "cocoa");
        draft.update_instruction(0, "Bake");

        let first = build_recipe(draft.clone()).unwrap();
        let second = build_recipe(draft).unwrap();

        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn test_build_recipe_rejects_invalid_draft() {
        let result = build_recipe(RecipeDraft::default());
        assert!(matches!(
            result,
            Err(StoreError::InvalidDraft(DraftError::MissingField("title")))
        ));
    }

    #[test]
    fn test_sort_newest_first() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut old = recipe("old", "Old", "Cakes", "", &["x"]);
        old.created_at = base;
        let mut new = recipe("new", "New", "Cakes", "", &["x"]);
        new.created_at = base + Duration::days(1);
        let mut tie_b = recipe("b", "Tie B", "Cakes", "", &["x"]);
        tie_b.created_at = base;
        let mut recipes = vec![tie_b, old, new];

        sort_newest_first(&mut recipes);

        let ids: Vec<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "b", "old"]);
    }

    #[test]
    fn test_check_unique_ids() {
        let recipes = vec![
            recipe("1", "A", "Cakes", "", &["x"]),
            recipe("2", "B", "Cakes", "", &["x"]),
        ];
        assert!(check_unique_ids(&recipes).is_ok());

        let recipes = vec![
            recipe("1", "A", "Cakes", "", &["x"]),
            recipe("1", "B", "Cakes", "", &["x"]),
        ];
        assert!(matches!(
            check_unique_ids(&recipes),
            Err(StoreError::DuplicateId(id)) if id == "1"
        ));
    }
}
