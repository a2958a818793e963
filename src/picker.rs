use rand::Rng;

use crate::{
    domain::{MealBucket, Recipe},
    error::PickError,
};

/// Recipes eligible for a draw.
#[derive(Debug, PartialEq, Eq)]
pub struct Candidates<'a> {
    pub recipes: Vec<&'a Recipe>,
    /// Set when no recipe matched the bucket and the category-only set was used.
    pub fell_back: bool,
}

pub fn select_candidates<'a>(
    recipes: &'a [Recipe],
    category: &str,
    bucket: MealBucket,
) -> Candidates<'a> {
    let exact: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| recipe.category == category && recipe.meal_type == bucket.code())
        .collect();
    if !exact.is_empty() {
        return Candidates {
            recipes: exact,
            fell_back: false,
        };
    }

    Candidates {
        recipes: recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .collect(),
        fell_back: true,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Pick<'a> {
    pub recipe: &'a Recipe,
    pub bucket: MealBucket,
    pub fell_back: bool,
}

pub fn pick_recipe<'a, R: Rng + ?Sized>(
    recipes: &'a [Recipe],
    category: &str,
    bucket: MealBucket,
    rng: &mut R,
) -> Result<Pick<'a>, PickError> {
    if category.is_empty() {
        return Err(PickError::NoCategory);
    }

    let candidates = select_candidates(recipes, category, bucket);
    if candidates.recipes.is_empty() {
        return Err(PickError::NoMatch);
    }

    let index = rng.gen_range(0..candidates.recipes.len());
    Ok(Pick {
        recipe: candidates.recipes[index],
        bucket,
        fell_back: candidates.fell_back,
    })
}
