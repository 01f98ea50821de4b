//! The recipe book: the single owner of the catalog's browsing state.
//!
//! A [`RecipeBook`] holds the recipe store, the static categories, the
//! active [`CategoryFilter`] and the search query. The list to display is
//! derived from those on every call, so it can never go stale.

use crate::config::{CatalogConfig, StoreConfig};
use crate::model::{Category, Recipe, RecipeDraft};
use crate::search::{count_by_category, derive_visible_recipes, CategoryFilter};
use crate::store::{DirectoryStore, MemoryStore, RecipeStore, StoreError};

/// A category together with how many recipes it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary<'a> {
    pub category: &'a Category,
    /// Count over the whole collection, regardless of filter and query
    pub recipe_count: usize,
    /// Whether this category is the active filter
    pub selected: bool,
}

/// Why the visible list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The catalog holds no recipes at all
    NoRecipesYet,
    /// Recipes exist but none pass the current filter and query
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoRecipesYet => "Start by adding your first recipe!",
            EmptyState::NoMatches => "Try adjusting your search or filters",
        }
    }
}

/// A recipe catalog and the state of one browsing session over it.
///
/// Only the store and the categories are persistent. The selected category
/// and the query start empty and drive [`visible_recipes`](Self::visible_recipes).
pub struct RecipeBook {
    store: Box<dyn RecipeStore + Send>,
    categories: Vec<Category>,
    selected: CategoryFilter,
    query: String,
}

impl RecipeBook {
    pub fn new(store: Box<dyn RecipeStore + Send>, categories: Vec<Category>) -> Self {
        RecipeBook {
            store,
            categories,
            selected: CategoryFilter::NoFilter,
            query: String::new(),
        }
    }

    /// Creates a book with the configured categories and store backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the configured store cannot be opened.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, StoreError> {
        let store: Box<dyn RecipeStore + Send> = match &config.store {
            StoreConfig::Memory => Box::new(MemoryStore::new()),
            StoreConfig::Directory { path } => Box::new(DirectoryStore::open(path)?),
        };
        Ok(Self::new(store, config.categories.clone()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The full, unfiltered collection, newest first.
    pub fn recipes(&self) -> &[Recipe] {
        self.store.recipes()
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Handles a click on a category: selects it, or clears the filter if
    /// it was already selected.
    pub fn toggle_category(&mut self, name: &str) {
        self.selected = self.selected.toggle(name);
        tracing::debug!(selected = ?self.selected, "category filter changed");
    }

    pub fn clear_category(&mut self) {
        self.selected = CategoryFilter::NoFilter;
    }

    /// Replaces the selection outright, without toggle semantics.
    pub fn select_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.selected = filter.into();
        tracing::debug!(selected = ?self.selected, "category filter changed");
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "search query changed");
    }

    /// The recipes passing the current filter and query, newest first.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        derive_visible_recipes(self.store.recipes(), &self.selected, &self.query)
    }

    /// Every configured category with its unfiltered recipe count.
    pub fn category_summaries(&self) -> Vec<CategorySummary<'_>> {
        let recipes = self.store.recipes();
        self.categories
            .iter()
            .map(|category| CategorySummary {
                category,
                recipe_count: count_by_category(recipes, &category.name),
                selected: self.selected.category() == Some(category.name.as_str()),
            })
            .collect()
    }

    /// Submits the add-recipe form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the draft is invalid or cannot be stored.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = self.store.create(draft)?;
        tracing::debug!(id = %recipe.id, category = %recipe.category, "added recipe");
        Ok(recipe)
    }

    /// Looks up a recipe for its detail page.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.store.get(id)
    }

    /// Heading of the recipe list.
    pub fn heading(&self) -> String {
        match &self.selected {
            CategoryFilter::FilterBy(name) => format!("{name} Recipes"),
            CategoryFilter::NoFilter => "All Recipes".to_string(),
        }
    }

    /// The empty-list state, or `None` when there is something to show.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_recipes().is_empty() {
            None
        } else if self.selected.is_active() || !self.query.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoRecipesYet)
        }
    }
}

impl std::fmt::Debug for RecipeBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeBook")
            .field("recipes", &self.store.recipes().len())
            .field("categories", &self.categories)
            .field("selected", &self.selected)
            .field("query", &self.query)
            .finish()
    }
}

/// Formats a recipe count, e.g. "1 recipe" or "3 recipes".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 recipe".to_string()
    } else {
        format!("{count} recipes")
    }
}
