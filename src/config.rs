use std::path::{Path, PathBuf};

use crate::controllers::DEFAULT_MENU_DAYS;

const DATA_DIR: &str = "data";
const RECIPES_FILE: &str = "recipes.json";
const SHOPPING_LIST_FILE: &str = "shopping_list.txt";

/// File locations, menu length and output styling used by the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub recipes_path: PathBuf,
    pub shopping_list_path: PathBuf,
    pub menu_days: usize,
    /// Colour and bold the transcript; only worth enabling on a terminal
    pub styled: bool,
}

impl Config {
    /// Keep both data files directly inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            recipes_path: dir.join(RECIPES_FILE),
            shopping_list_path: dir.join(SHOPPING_LIST_FILE),
            menu_days: DEFAULT_MENU_DAYS,
            styled: false,
        }
    }
}

impl Default for Config {
    /// `data/recipes.json` and `data/shopping_list.txt` relative to the working directory
    fn default() -> Self {
        Self::in_dir(DATA_DIR)
    }
}
