mod ingredient;
mod recipe;
mod sample;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use sample::sample_recipes;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
