use super::{build_recipe, check_unique_ids, RecipeStore, StoreError};
use crate::model::{Recipe, RecipeDraft};

/// A store that keeps recipes for the current session only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `recipes`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two recipes share an identifier.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Result<Self, StoreError> {
        check_unique_ids(&recipes)?;
        Ok(MemoryStore { recipes })
    }
}

impl RecipeStore for MemoryStore {
    fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = build_recipe(draft)?;
        tracing::debug!(id = %recipe.id, title = %recipe.title, "created recipe in memory");
        self.recipes.insert(0, recipe.clone());
        Ok(recipe)
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{cookies_and_pie, recipe};
    use crate::model::DraftError;

    fn draft(title: &str, category: &str) -> RecipeDraft {
        let mut draft = RecipeDraft {
            title: title.to_string(),
            category: category.to_string(),
            description: "Test description".to_string(),
            ..Default::default()
        };
        draft.update_ingredient(0, "flour");
        draft.update_instruction(0, "Bake");
        draft
    }

    #[test]
    fn test_new_store_is_empty() {
        assert!(MemoryStore::new().recipes().is_empty());
    }

    #[test]
    fn test_create_prepends() {
        let mut store = MemoryStore::new();
        let first = store.create(draft("Shortbread", "Cookies")).unwrap();
        let second = store.create(draft("Croissant", "Pastries")).unwrap();

        let titles: Vec<_> = store.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Croissant", "Shortbread"]);
        assert_eq!(store.get(&first.id), Some(&first));
        assert_eq!(store.get(&second.id), Some(&second));
    }

    #[test]
    fn test_create_invalid_draft_leaves_store_unchanged() {
        let mut store = MemoryStore::with_recipes(cookies_and_pie()).unwrap();
        let mut bad = draft("Rye", "Breads");
        bad.ingredients = vec![String::new()];

        let result = store.create(bad);
        assert!(matches!(
            result,
            Err(StoreError::InvalidDraft(DraftError::NoIngredients))
        ));
        assert_eq!(store.recipes().len(), 2);
    }

    #[test]
    fn test_with_recipes_keeps_order() {
        let store = MemoryStore::with_recipes(cookies_and_pie()).unwrap();
        let ids: Vec<_> = store.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_with_recipes_rejects_duplicates() {
        let result = MemoryStore::with_recipes(vec![
            recipe("7", "A", "Cakes", "", &["x"]),
            recipe("7", "B", "Pies", "", &["y"]),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::with_recipes(cookies_and_pie()).unwrap();
        assert!(store.get("nonexistent").is_none());
    }
}
