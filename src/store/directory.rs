use super::{build_recipe, check_unique_ids, sort_newest_first, RecipeStore, StoreError};
use crate::model::{Recipe, RecipeDraft};
use camino::{Utf8Path, Utf8PathBuf};
use glob::glob;
use std::fs;

/// A store backed by a directory holding one `<id>.json` file per recipe.
#[derive(Debug)]
pub struct DirectoryStore {
    dir: Utf8PathBuf,
    recipes: Vec<Recipe>,
}

impl DirectoryStore {
    /// Opens the store in `dir`, creating the directory if it is missing.
    ///
    /// Every `*.json` file directly inside `dir` is loaded as a recipe.
    /// Subdirectories are not scanned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if:
    /// - the directory cannot be created or read
    /// - a recipe file is not valid recipe JSON
    /// - two files hold the same recipe identifier
    pub fn open<P: AsRef<Utf8Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let pattern = Utf8PathBuf::from(glob::Pattern::escape(dir.as_str())).join("*.json");
        let mut recipes = Vec::new();

        for entry in glob(pattern.as_str())? {
            let path = entry?;
            let path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| StoreError::InvalidPath(p.display().to_string()))?;
            recipes.push(read_recipe(&path)?);
        }

        check_unique_ids(&recipes)?;
        sort_newest_first(&mut recipes);
        tracing::info!(dir = %dir, count = recipes.len(), "opened recipe directory");

        Ok(DirectoryStore { dir, recipes })
    }

    /// The directory recipes are stored in.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn recipe_path(&self, id: &str) -> Utf8PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl RecipeStore for DirectoryStore {
    fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let recipe = build_recipe(draft)?;
        let path = self.recipe_path(&recipe.id);

        let json = serde_json::to_string_pretty(&recipe).map_err(|source| {
            StoreError::JsonError {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, json)?;
        tracing::debug!(id = %recipe.id, path = %path, "wrote recipe file");

        self.recipes.insert(0, recipe.clone());
        Ok(recipe)
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

fn read_recipe(path: &Utf8Path) -> Result<Recipe, StoreError> {
    let content = fs::read_to_string(path)?;
    let recipe = serde_json::from_str(&content).map_err(|source| StoreError::JsonError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path, "loaded recipe file");
    Ok(recipe)
}
