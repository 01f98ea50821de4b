//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Complex types are converted to simpler representations suitable for FFI:
//! timestamps become RFC 3339 strings and borrowed views become owned records.

use crate::book::{count_label, CategorySummary, EmptyState, RecipeBook};
use crate::config::{CatalogConfig, ConfigError};
use crate::model::{self, Difficulty, Recipe, RecipeDraft, FORM_CATEGORY_CHOICES};
use crate::store::StoreError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBookError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Config error: {message}")]
    Config { message: String },
}

impl From<StoreError> for RecipeBookError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidDraft(e) => RecipeBookError::Validation {
                message: e.to_string(),
            },
            e => RecipeBookError::Store {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for RecipeBookError {
    fn from(e: ConfigError) -> Self {
        RecipeBookError::Config {
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for FfiDifficulty {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => FfiDifficulty::Easy,
            Difficulty::Medium => FfiDifficulty::Medium,
            Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

impl From<FfiDifficulty> for Difficulty {
    fn from(d: FfiDifficulty) -> Self {
        match d {
            FfiDifficulty::Easy => Difficulty::Easy,
            FfiDifficulty::Medium => Difficulty::Medium,
            FfiDifficulty::Hard => Difficulty::Hard,
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    /// Prep plus cook time, in minutes
    pub total_time: u32,
    pub servings: u32,
    pub difficulty: FfiDifficulty,
    pub image_url: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id.clone(),
            title: r.title.clone(),
            category: r.category.clone(),
            description: r.description.clone(),
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            total_time: r.total_time(),
            servings: r.servings,
            difficulty: r.difficulty.into(),
            image_url: r.image_url.clone(),
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.to_rfc3339(),
        }
    }
}

/// FFI-safe representation of the add-recipe form.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRecipeDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: FfiDifficulty,
    /// Empty for no image
    pub image_url: String,
}

impl From<RecipeDraft> for FfiRecipeDraft {
    fn from(d: RecipeDraft) -> Self {
        FfiRecipeDraft {
            title: d.title,
            category: d.category,
            description: d.description,
            ingredients: d.ingredients,
            instructions: d.instructions,
            prep_time: d.prep_time,
            cook_time: d.cook_time,
            servings: d.servings,
            difficulty: d.difficulty.into(),
            image_url: d.image_url,
        }
    }
}

impl From<FfiRecipeDraft> for RecipeDraft {
    fn from(d: FfiRecipeDraft) -> Self {
        RecipeDraft {
            title: d.title,
            category: d.category,
            description: d.description,
            ingredients: d.ingredients,
            instructions: d.instructions,
            prep_time: d.prep_time,
            cook_time: d.cook_time,
            servings: d.servings,
            difficulty: d.difficulty.into(),
            image_url: d.image_url,
        }
    }
}

/// A category card: the category plus its unfiltered recipe count.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiCategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub recipe_count: u32,
    /// Display text for the count, e.g. "1 recipe"
    pub count_label: String,
    /// True if this category is the active filter
    pub selected: bool,
}

impl From<&CategorySummary<'_>> for FfiCategorySummary {
    fn from(s: &CategorySummary<'_>) -> Self {
        FfiCategorySummary {
            id: s.category.id.clone(),
            name: s.category.name.clone(),
            description: s.category.description.clone(),
            icon: s.category.icon.clone(),
            recipe_count: saturating_u32(s.recipe_count),
            count_label: count_label(s.recipe_count),
            selected: s.selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiEmptyState {
    NoRecipesYet,
    NoMatches,
}

impl From<EmptyState> for FfiEmptyState {
    fn from(s: EmptyState) -> Self {
        match s {
            EmptyState::NoRecipesYet => FfiEmptyState::NoRecipesYet,
            EmptyState::NoMatches => FfiEmptyState::NoMatches,
        }
    }
}

/// FFI-safe handle to a recipe book.
///
/// The view layer keeps one of these for the session and calls into it on
/// every state change.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    inner: Mutex<RecipeBook>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Creates a session-only book with the built-in categories.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(FfiRecipeBook::wrap(RecipeBook::new(
            Box::new(crate::store::MemoryStore::new()),
            crate::model::default_categories(),
        )))
    }

    /// Returns every category with its unfiltered recipe count.
    pub fn categories(&self) -> Vec<FfiCategorySummary> {
        self.lock()
            .category_summaries()
            .iter()
            .map(FfiCategorySummary::from)
            .collect()
    }

    /// Returns the recipes passing the current filter and query.
    pub fn visible_recipes(&self) -> Vec<FfiRecipe> {
        self.lock()
            .visible_recipes()
            .into_iter()
            .map(FfiRecipe::from)
            .collect()
    }

    /// Total number of recipes, ignoring filter and query.
    pub fn recipe_count(&self) -> u32 {
        saturating_u32(self.lock().recipes().len())
    }

    /// Selects a category, or clears the filter if it is already selected.
    pub fn toggle_category(&self, name: String) {
        self.lock().toggle_category(&name);
    }

    pub fn clear_category(&self) {
        self.lock().clear_category();
    }

    /// Sets the selected category directly; none clears the filter.
    pub fn select_category(&self, name: Option<String>) {
        self.lock().select_category(name);
    }

    /// Returns the selected category name, if any.
    pub fn selected_category(&self) -> Option<String> {
        self.lock().selected_category().category().map(str::to_string)
    }

    pub fn set_query(&self, query: String) {
        self.lock().set_query(query);
    }

    pub fn query(&self) -> String {
        self.lock().query().to_string()
    }

    /// Validates the draft and adds it as a new recipe.
    pub fn add_recipe(&self, draft: FfiRecipeDraft) -> Result<FfiRecipe, RecipeBookError> {
        let recipe = self.lock().add_recipe(draft.into())?;
        Ok(FfiRecipe::from(&recipe))
    }

    /// Looks up a recipe by identifier.
    pub fn recipe(&self, id: String) -> Option<FfiRecipe> {
        self.lock().recipe(&id).map(FfiRecipe::from)
    }

    /// Heading of the recipe list, e.g. "All Recipes" or "Pies Recipes".
    pub fn heading(&self) -> String {
        self.lock().heading()
    }

    /// Count of visible recipes as display text.
    pub fn count_label(&self) -> String {
        count_label(self.lock().visible_recipes().len())
    }

    /// Why the visible list is empty, or nothing if it is not.
    pub fn empty_state(&self) -> Option<FfiEmptyState> {
        self.lock().empty_state().map(FfiEmptyState::from)
    }

    /// Hint text for the empty list, or nothing if it is not empty.
    pub fn empty_state_message(&self) -> Option<String> {
        self.lock()
            .empty_state()
            .map(|state| state.message().to_string())
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl FfiRecipeBook {
    fn wrap(book: RecipeBook) -> Self {
        FfiRecipeBook {
            inner: Mutex::new(book),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecipeBook> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Opens a recipe book.
///
/// # Arguments
/// * `config_path` - Path to a YAML catalog config, or none for the defaults
///
/// # Returns
/// The recipe book, or an error if the config or store cannot be loaded.
#[uniffi::export]
pub fn open_recipe_book(config_path: Option<String>) -> Result<Arc<FfiRecipeBook>, RecipeBookError> {
    let config = match config_path {
        Some(path) => CatalogConfig::from_path(path.as_str())?,
        None => CatalogConfig::default(),
    };
    let book = RecipeBook::from_config(&config)?;
    Ok(Arc::new(FfiRecipeBook::wrap(book)))
}

/// Returns the initial state of the add-recipe form.
#[uniffi::export]
pub fn new_recipe_draft() -> FfiRecipeDraft {
    RecipeDraft::default().into()
}

/// Returns the category choices offered by the add-recipe form.
#[uniffi::export]
pub fn form_category_choices() -> Vec<String> {
    FORM_CATEGORY_CHOICES.iter().map(|c| c.to_string()).collect()
}

/// Parses a prep or cook time input; unparseable input counts as 0.
#[uniffi::export]
pub fn parse_minutes(input: String) -> u32 {
    model::parse_minutes(&input)
}

/// Parses a servings input; unparseable or zero input counts as 1.
#[uniffi::export]
pub fn parse_servings(input: String) -> u32 {
    model::parse_servings(&input)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
