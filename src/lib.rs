uniffi::setup_scaffolding!();

pub mod book;
pub mod config;
pub mod ffi;
pub mod model;
pub mod search;
pub mod store;

pub use book::{count_label, CategorySummary, EmptyState, RecipeBook};
pub use config::{CatalogConfig, ConfigError, StoreConfig};
pub use model::*;
pub use search::{count_by_category, derive_visible_recipes, CategoryFilter, SearchField};
pub use store::{DirectoryStore, MemoryStore, RecipeStore, StoreError};
