use crate::Recipe;

/// The active category filter.
///
/// Either no filter at all or exactly one category name, never several.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    NoFilter,
    FilterBy(String),
}

impl CategoryFilter {
    /// Applies a click on the category `name`.
    ///
    /// Selecting the category that is already active clears the filter;
    /// selecting any other category replaces it.
    pub fn toggle(&self, name: &str) -> CategoryFilter {
        match self {
            CategoryFilter::FilterBy(current) if current == name => CategoryFilter::NoFilter,
            _ => CategoryFilter::FilterBy(name.to_string()),
        }
    }

    /// Returns the selected category name, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            CategoryFilter::NoFilter => None,
            CategoryFilter::FilterBy(name) => Some(name),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CategoryFilter::FilterBy(_))
    }

    /// Whether `recipe` passes this filter. Exact, case-sensitive comparison.
    pub fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            CategoryFilter::NoFilter => true,
            CategoryFilter::FilterBy(name) => recipe.category == *name,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(category: Option<String>) -> Self {
        category.map_or(CategoryFilter::NoFilter, CategoryFilter::FilterBy)
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(category: Option<&str>) -> Self {
        category.map(str::to_string).into()
    }
}

/// A recipe field the free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Description,
    /// Matches if any single ingredient matches
    Ingredients,
}

impl SearchField {
    /// Every field a query is matched against. Instructions and the
    /// category are not searched.
    pub const ALL: &'static [SearchField] = &[
        SearchField::Title,
        SearchField::Description,
        SearchField::Ingredients,
    ];

    /// Whether this field of `recipe` contains `lowered_query`.
    ///
    /// The query must already be lowercased; the field is lowercased here.
    pub fn matches(&self, recipe: &Recipe, lowered_query: &str) -> bool {
        match self {
            SearchField::Title => contains_lowered(&recipe.title, lowered_query),
            SearchField::Description => contains_lowered(&recipe.description, lowered_query),
            SearchField::Ingredients => recipe
                .ingredients
                .iter()
                .any(|ingredient| contains_lowered(ingredient, lowered_query)),
        }
    }
}

fn contains_lowered(text: &str, lowered_query: &str) -> bool {
    text.to_lowercase().contains(lowered_query)
}
