use crate::error::{Error, Result};
use crate::ranker::{reference_corpus, RecipeDocument};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub version: u32,
    pub recipes: Vec<RecipeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub title: String,
    pub ingredients: String,
}

impl CorpusConfig {
    /// Load a recipe corpus from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read corpus from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.as_ref().display(), msg)),
            other => other,
        })?;

        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: CorpusConfig = serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse corpus: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported corpus version: {}. Expected version 1",
                self.version
            )));
        }

        if self.recipes.is_empty() {
            return Err(Error::Config("Corpus contains no recipes".to_string()));
        }

        for (i, recipe) in self.recipes.iter().enumerate() {
            if recipe.title.trim().is_empty() {
                return Err(Error::Config(format!("Recipe #{} has an empty title", i + 1)));
            }
            if recipe.ingredients.trim().is_empty() {
                return Err(Error::Config(format!(
                    "Recipe '{}' has no ingredients",
                    recipe.title
                )));
            }
        }

        // Titles are display keys only, so duplicates are tolerated
        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.title.as_str()) {
                warn!("Duplicate recipe title in corpus: {}", recipe.title);
            }
        }

        Ok(())
    }

    pub fn into_documents(self) -> Vec<RecipeDocument> {
        self.recipes
            .into_iter()
            .map(|r| RecipeDocument::new(r.title, r.ingredients))
            .collect()
    }
}

/// Read the corpus from `path`, or fall back to the built-in dataset
pub fn load_corpus(path: Option<&Path>) -> Result<Vec<RecipeDocument>> {
    match path {
        Some(path) => {
            let config = CorpusConfig::from_file(path)?;
            info!(
                "Loaded {} recipes from {}",
                config.recipes.len(),
                path.display()
            );
            Ok(config.into_documents())
        }
        None => {
            info!("Using built-in recipe dataset");
            Ok(reference_corpus())
        }
    }
}
