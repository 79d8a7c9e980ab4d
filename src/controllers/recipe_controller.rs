use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{MenuPlannerError, Result};
use crate::models::Recipe;

/// Persists the whole recipe collection as a single indented JSON array
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored recipe
    /// A missing, unreadable or malformed file yields an empty collection
    pub async fn load(&self) -> Vec<Recipe> {
        match self.try_load().await {
            Ok(recipes) => {
                debug!(path = %self.path.display(), count = recipes.len(), "loaded recipes");
                recipes
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable recipe file");
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<Recipe>> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no recipe file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(MenuPlannerError::io(&self.path, err)),
        };

        // A literal `null` document counts as an empty collection
        let recipes: Option<Vec<Recipe>> = serde_json::from_str(&json)?;

        Ok(recipes.unwrap_or_default())
    }

    /// Overwrite the file with the full collection, creating its directory first
    pub async fn save(&self, recipes: &[Recipe]) -> Result<()> {
        ensure_parent_dir(&self.path).await?;

        let json = serde_json::to_string_pretty(recipes)?;
        fs::write(&self.path, json)
            .await
            .map_err(|err| MenuPlannerError::io(&self.path, err))?;

        info!(path = %self.path.display(), count = recipes.len(), "saved recipes");

        Ok(())
    }
}

/// Create the directory that will hold `path` if it does not exist yet
pub(crate) async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .await
            .map_err(|err| MenuPlannerError::io(dir, err))?;
    }

    Ok(())
}
