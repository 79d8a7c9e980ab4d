use std::fmt;

use serde::{Deserialize, Serialize};

use super::Ingredient;
use super::null_as_default;

/// A named dish with its ingredients and instructions.
///
/// Specialty recipes carry a cuisine tag; plain recipes leave it unset and
/// the tag is then omitted from the persisted JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(
        rename = "CuisineType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cuisine: Option<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
            cuisine: None,
        }
    }

    /// Tag the recipe with a cuisine, turning it into a specialty recipe
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// One-line description of a specialty recipe, `None` for plain recipes
    pub fn cuisine_summary(&self) -> Option<String> {
        self.cuisine.as_ref().map(|cuisine| {
            format!(
                "This {} recipe requires {} ingredients.",
                cuisine,
                self.ingredient_count()
            )
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cuisine {
            Some(cuisine) => write!(f, "{} ({})", self.name, cuisine),
            None => write!(f, "{}", self.name),
        }
    }
}
