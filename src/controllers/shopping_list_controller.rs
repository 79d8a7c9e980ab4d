use std::path::Path;

use tokio::fs;
use tracing::info;

use super::recipe_controller::ensure_parent_dir;
use crate::error::{MenuPlannerError, Result};
use crate::models::Recipe;

/// Flatten a menu into one `"{quantity} {unit} {name}"` line per ingredient,
/// in recipe-then-ingredient order
///
/// Nothing is merged: a recipe that appears on three days contributes its
/// ingredients three times.
pub fn export_shopping_list(menu: &[&Recipe]) -> Vec<String> {
    menu.iter()
        .flat_map(|recipe| recipe.ingredients.iter())
        .map(ToString::to_string)
        .collect()
}

/// Write the list to `path`, one newline-terminated line per item
pub async fn write_shopping_list(path: &Path, items: &[String]) -> Result<()> {
    ensure_parent_dir(path).await?;

    let contents: String = items.iter().map(|item| format!("{item}\n")).collect();
    fs::write(path, contents)
        .await
        .map_err(|err| MenuPlannerError::io(path, err))?;

    info!(path = %path.display(), items = items.len(), "wrote shopping list");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_recipes;
    use crate::models::test_fixtures::{carbonara, omelette};
    use rstest::*;

    #[rstest]
    fn test_export_repeated_recipe_is_not_merged(omelette: Recipe) {
        let menu = vec![&omelette, &omelette, &omelette];

        let items = export_shopping_list(&menu);

        assert_eq!(
            items,
            [
                "3 pcs Eggs",
                "0.25 cups Milk",
                "3 pcs Eggs",
                "0.25 cups Milk",
                "3 pcs Eggs",
                "0.25 cups Milk",
            ]
        );
    }

    #[rstest]
    fn test_export_keeps_recipe_then_ingredient_order(carbonara: Recipe, omelette: Recipe) {
        let menu = vec![&omelette, &carbonara];

        let items = export_shopping_list(&menu);

        assert_eq!(
            items,
            [
                "3 pcs Eggs",
                "0.25 cups Milk",
                "1 lb Pasta",
                "3 pcs Eggs",
                "0.5 lb Bacon",
            ]
        );
    }

    #[test]
    fn test_export_length_matches_ingredient_total() {
        let recipes = sample_recipes();
        let menu: Vec<&Recipe> = recipes.iter().chain(recipes.iter().take(2)).collect();

        let items = export_shopping_list(&menu);

        let expected: usize = menu.iter().map(|r| r.ingredient_count()).sum();
        assert_eq!(items.len(), expected);
        assert_eq!(items.len(), 13);
    }

    #[test]
    fn test_export_empty_menu() {
        assert!(export_shopping_list(&[]).is_empty());
    }

    #[test]
    fn test_export_recipe_without_ingredients() {
        let water = Recipe::new("Water", vec![], "Pour.");

        assert!(export_shopping_list(&[&water]).is_empty());
    }

    #[tokio::test]
    async fn test_write_shopping_list_lines() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("data").join("shopping_list.txt");
        let items = vec!["3 pcs Eggs".to_string(), "0.25 cups Milk".to_string()];

        write_shopping_list(&path, &items)
            .await
            .expect("Failed to write shopping list");

        let written = fs::read_to_string(&path)
            .await
            .expect("Failed to read shopping list");
        assert_eq!(written, "3 pcs Eggs\n0.25 cups Milk\n");
    }

    #[tokio::test]
    async fn test_write_shopping_list_overwrites() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("shopping_list.txt");

        write_shopping_list(&path, &["1 lb Pasta".to_string()])
            .await
            .expect("Failed to write first list");
        write_shopping_list(&path, &[])
            .await
            .expect("Failed to write second list");

        let written = fs::read_to_string(&path)
            .await
            .expect("Failed to read shopping list");
        assert!(written.is_empty());
    }
}
