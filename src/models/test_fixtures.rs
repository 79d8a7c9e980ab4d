use rstest::*;
use tempfile::TempDir;

use super::{Ingredient, Recipe};
use crate::controllers::RecipeStore;

#[fixture]
pub fn omelette() -> Recipe {
    Recipe::new(
        "Omelette",
        vec![
            Ingredient::new("Eggs", 3.0, "pcs"),
            Ingredient::new("Milk", 0.25, "cups"),
        ],
        "Beat eggs with milk. Cook in pan.",
    )
}

#[fixture]
pub fn carbonara() -> Recipe {
    Recipe::new(
        "Pasta Carbonara",
        vec![
            Ingredient::new("Pasta", 1.0, "lb"),
            Ingredient::new("Eggs", 3.0, "pcs"),
            Ingredient::new("Bacon", 0.5, "lb"),
        ],
        "Boil pasta. Fry bacon. Mix with eggs off heat.",
    )
    .with_cuisine("Italian")
}

/// Test fixture that points a store at `data/recipes.json` inside a fresh
/// temporary directory
///
/// The directory is returned alongside the store so it outlives the test body.
#[fixture]
pub fn temp_store() -> (TempDir, RecipeStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = RecipeStore::new(dir.path().join("data").join("recipes.json"));
    (dir, store)
}
