use rand::Rng;
use tracing::debug;

use crate::models::Recipe;

/// Number of days in a weekly menu
pub const DEFAULT_MENU_DAYS: usize = 7;

/// An ordered selection of recipes, one per day; the same recipe may repeat
pub type Menu<'a> = Vec<&'a Recipe>;

/// Pick one recipe per day, uniformly and independently (with replacement)
/// Returns an empty menu when there is nothing to pick from
pub fn generate_menu<'a, R: Rng>(available: &'a [Recipe], days: usize, rng: &mut R) -> Menu<'a> {
    if available.is_empty() {
        debug!(days, "no recipes to build a menu from");
        return Vec::new();
    }

    let menu: Menu<'a> = (0..days)
        .map(|_| &available[rng.gen_range(0..available.len())])
        .collect();

    debug!(days, choices = available.len(), "generated menu");

    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_recipes;
    use crate::models::test_fixtures::omelette;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::*;

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(DEFAULT_MENU_DAYS)]
    #[case(30)]
    fn test_generate_menu_length_and_membership(mut rng: StdRng, #[case] days: usize) {
        let recipes = sample_recipes();

        let menu = generate_menu(&recipes, days, &mut rng);

        assert_eq!(menu.len(), days);
        for recipe in &menu {
            assert!(recipes.iter().any(|r| std::ptr::eq(r, *recipe)));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(DEFAULT_MENU_DAYS)]
    #[case(100)]
    fn test_generate_menu_from_nothing_is_empty(mut rng: StdRng, #[case] days: usize) {
        let menu = generate_menu(&[], days, &mut rng);

        assert!(menu.is_empty());
    }

    #[rstest]
    fn test_generate_menu_single_choice(mut rng: StdRng, omelette: Recipe) {
        let recipes = vec![omelette];

        let menu = generate_menu(&recipes, 3, &mut rng);

        let names: Vec<&str> = menu.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Omelette", "Omelette", "Omelette"]);
    }

    #[rstest]
    fn test_generate_menu_covers_every_recipe(mut rng: StdRng) {
        let recipes = sample_recipes();

        let menu = generate_menu(&recipes, 3000, &mut rng);

        // Uniform picks: each of the three recipes should land near 1000
        for recipe in &recipes {
            let hits = menu.iter().filter(|r| std::ptr::eq(**r, recipe)).count();
            assert!(
                (800..=1200).contains(&hits),
                "{} picked {} times",
                recipe.name,
                hits
            );
        }
    }

    #[rstest]
    fn test_generate_menu_same_seed_same_menu() {
        let recipes = sample_recipes();

        let first = generate_menu(&recipes, DEFAULT_MENU_DAYS, &mut StdRng::seed_from_u64(42));
        let second = generate_menu(&recipes, DEFAULT_MENU_DAYS, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
