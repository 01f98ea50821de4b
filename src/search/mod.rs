//! The filter engine.
//!
//! Derives the displayed recipe list from the full collection, the active
//! [`CategoryFilter`] and the free-text query, and counts recipes per
//! category. Everything here is pure: nothing is mutated, nothing fails.

use crate::Recipe;

mod model;

pub use model::{CategoryFilter, SearchField};

/// Returns the recipes to display, in collection order.
///
/// A recipe is kept if it passes the category filter and, when `query` is
/// non-empty, at least one [`SearchField`] contains the query ignoring case.
/// An empty query matches everything; whitespace is not trimmed.
pub fn derive_visible_recipes<'a>(
    recipes: &'a [Recipe],
    selected: &CategoryFilter,
    query: &str,
) -> Vec<&'a Recipe> {
    let lowered_query = query.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| selected.admits(recipe))
        .filter(|recipe| query.is_empty() || matches_query(recipe, &lowered_query))
        .collect()
}

/// Counts the recipes listed under `category_name`.
///
/// Always called with the whole collection, so category counts do not
/// change with the active filter or query.
pub fn count_by_category(recipes: &[Recipe], category_name: &str) -> usize {
    recipes
        .iter()
        .filter(|recipe| recipe.category == category_name)
        .count()
}

fn matches_query(recipe: &Recipe, lowered_query: &str) -> bool {
    SearchField::ALL
        .iter()
        .any(|field| field.matches(recipe, lowered_query))
}
