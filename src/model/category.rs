use serde::{Deserialize, Serialize};

/// A recipe category shown as a card and a filter button.
///
/// Categories are static configuration. Recipes reference them by
/// [`name`](Category::name), so names must be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display glyph, usually a single emoji
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// Category choices offered by the add-recipe form.
///
/// This is the built-in category list plus a catch-all "Other", which has no
/// category card of its own.
pub const FORM_CATEGORY_CHOICES: &[&str] = &[
    "Cookies", "Brownies", "Cakes", "Pies", "Breads", "Pastries", "Other",
];

/// Returns the built-in baking categories.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Cookies", "Sweet and delicious cookies", "🍪"),
        Category::new("2", "Brownies", "Rich and fudgy brownies", "🍫"),
        Category::new("3", "Cakes", "Beautiful and tasty cakes", "🎂"),
        Category::new("4", "Pies", "Classic homemade pies", "🥧"),
        Category::new("5", "Breads", "Fresh baked breads", "🍞"),
        Category::new("6", "Pastries", "Delicate pastries", "🥐"),
    ]
}
