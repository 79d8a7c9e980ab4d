use super::{Ingredient, Recipe};

/// The built-in recipe set used to seed an empty collection
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Pasta Carbonara",
            vec![
                Ingredient::new("Pasta", 1.0, "lb"),
                Ingredient::new("Eggs", 3.0, "pcs"),
                Ingredient::new("Bacon", 0.5, "lb"),
            ],
            "Boil pasta. Fry bacon. Mix with eggs off heat.",
        )
        .with_cuisine("Italian"),
        Recipe::new(
            "Omelette",
            vec![
                Ingredient::new("Eggs", 3.0, "pcs"),
                Ingredient::new("Milk", 0.25, "cups"),
            ],
            "Beat eggs with milk. Cook in pan.",
        ),
        Recipe::new(
            "Thai Green Curry Salad",
            vec![
                Ingredient::new("Lettuce", 1.0, "head"),
                Ingredient::new("Tomato", 2.0, "pcs"),
                Ingredient::new("Green Curry Paste", 2.0, "tbsp"),
            ],
            "Chop and toss with curry dressing.",
        )
        .with_cuisine("Thai"),
    ]
}
