mod menu_controller;
mod recipe_controller;
mod shopping_list_controller;

pub use menu_controller::{DEFAULT_MENU_DAYS, Menu, generate_menu};
pub use recipe_controller::RecipeStore;
pub use shopping_list_controller::{export_shopping_list, write_shopping_list};
