// ABOUTME: Recipe store holding the fetched collection and the active filtered view
// ABOUTME: Loads once per page session; filtered view is a list of collection indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::errors::FetchError;
use crate::external::RecipeSource;
use crate::filter::apply_filters;
use crate::models::Recipe;

/// Authoritative recipe collection plus the current filtered view
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    view: Vec<usize>,
}

impl RecipeStore {
    /// Empty store (no collection loaded yet)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recipes: Vec::new(),
            view: Vec::new(),
        }
    }

    /// Fetch the collection from `source` and publish it unfiltered
    ///
    /// On failure nothing is replaced.
    ///
    /// # Errors
    ///
    /// Propagates the source's `FetchError`; there is no retry
    pub async fn load<S>(&mut self, source: &S) -> Result<&[Recipe], FetchError>
    where
        S: RecipeSource + ?Sized,
    {
        match source.fetch_recipes().await {
            Ok(recipes) => {
                self.replace(recipes);
                Ok(&self.recipes)
            }
            Err(e) => {
                warn!(error = %e, "Recipe collection load failed");
                Err(e)
            }
        }
    }

    /// Replace the collection wholesale; the view becomes the full collection
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        info!(count = recipes.len(), "Recipe collection loaded");
        self.view = (0..recipes.len()).collect();
        self.recipes = recipes;
    }

    /// Recompute the filtered view from both predicates
    pub fn apply_filters(&mut self, query: &str, cuisine: &str) -> &[usize] {
        self.view = apply_filters(&self.recipes, query, cuisine);
        debug!(query, cuisine, matches = self.view.len(), "Filtered view recomputed");
        &self.view
    }

    /// Full collection in source order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Filtered view as collection indices
    #[must_use]
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Filtered view resolved to recipes
    #[must_use]
    pub fn view_recipes(&self) -> Vec<&Recipe> {
        self.resolve(&self.view)
    }

    /// Resolve collection indices to recipes, skipping any out of range
    #[must_use]
    pub fn resolve(&self, indices: &[usize]) -> Vec<&Recipe> {
        indices
            .iter()
            .filter_map(|&index| self.recipes.get(index))
            .collect()
    }

    /// Number of recipes in the filtered view
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Number of recipes in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct cuisines, sorted ascending, for the cuisine selector
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        self.recipes
            .iter()
            .map(|recipe| recipe.cuisine.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Look a recipe up by id
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}
