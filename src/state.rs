use log::{debug, info, warn};
use rand::Rng;

use crate::{
    domain::{Category, MealBucket, Recipe},
    error::{LoadError, PickError},
    picker::{self, Pick},
    storage::LoadEvent,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
}

/// Everything the picker screen knows.
///
/// The two lists are filled independently by load events and either may still
/// be empty when a draw is requested. Each public method is one transition.
#[derive(Debug, Default)]
pub struct MenuState {
    categories: Vec<Category>,
    recipes: Vec<Recipe>,
    chosen_category: String,
    chosen_index: Option<usize>,
    last_result: Option<String>,
    categories_loaded: bool,
    recipes_loaded: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.categories_loaded {
            Phase::Ready
        } else {
            Phase::Uninitialized
        }
    }

    pub fn is_loading(&self) -> bool {
        !(self.categories_loaded && self.recipes_loaded)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn chosen_category(&self) -> &str {
        &self.chosen_category
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Row of the chosen category in the loaded list.
    ///
    /// Names may repeat, so the row is tracked separately from the name.
    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen_index
    }

    pub fn apply_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Categories(loaded) => self.on_categories_loaded(loaded),
            LoadEvent::Recipes(loaded) => self.on_recipes_loaded(loaded),
        }
    }

    pub fn on_categories_loaded(&mut self, loaded: Result<Vec<Category>, LoadError>) {
        if self.categories_loaded {
            return;
        }
        self.categories_loaded = true;

        match loaded {
            Ok(categories) => {
                debug!("event=categories_loaded count={}", categories.len());
                if self.chosen_category.is_empty() {
                    if let Some(first) = categories.first() {
                        self.chosen_category = first.name.clone();
                    }
                }
                self.chosen_index = categories
                    .iter()
                    .position(|category| category.name == self.chosen_category);
                self.categories = categories;
            }
            Err(e) => warn!("event=categories_load_failed error={}", e),
        }
    }

    pub fn on_recipes_loaded(&mut self, loaded: Result<Vec<Recipe>, LoadError>) {
        if self.recipes_loaded {
            return;
        }
        self.recipes_loaded = true;

        match loaded {
            Ok(recipes) => {
                debug!("event=recipes_loaded count={}", recipes.len());
                self.recipes = recipes;
            }
            Err(e) => warn!("event=recipes_load_failed error={}", e),
        }
    }

    pub fn choose_category(&mut self, name: impl Into<String>) {
        self.chosen_category = name.into();
        self.chosen_index = self
            .categories
            .iter()
            .position(|category| category.name == self.chosen_category);
    }

    pub fn choose_category_by_index(&mut self, index: usize) -> bool {
        match self.categories.get(index) {
            Some(category) => {
                self.chosen_category = category.name.clone();
                self.chosen_index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Draws a recipe for the chosen category and stores its name.
    ///
    /// On failure the previous result is left in place.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        bucket: MealBucket,
        rng: &mut R,
    ) -> Result<Pick<'_>, PickError> {
        let pick = picker::pick_recipe(&self.recipes, &self.chosen_category, bucket, rng)?;
        info!(
            "event=menu_picked name={} id={} category={} bucket={} fallback={}",
            pick.recipe.name, pick.recipe.id, pick.recipe.category, pick.bucket, pick.fell_back
        );
        self.last_result = Some(pick.recipe.name.clone());
        Ok(pick)
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn io_failure() -> LoadError {
        LoadError::Io {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
    }

    fn soup_state() -> MenuState {
        let mut state = MenuState::new();
        state.on_categories_loaded(Ok(vec![Category::new("Soup"), Category::new("Rice")]));
        state.on_recipes_loaded(Ok(vec![
            Recipe::new("1", "Miso", "Soup", "M"),
            Recipe::new("2", "Consomme", "Soup", "D"),
        ]));
        state
    }

    #[test]
    fn test_starts_uninitialized_and_empty() {
        let state = MenuState::new();
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert!(state.is_loading());
        assert_eq!(state.chosen_category(), "");
        assert_eq!(state.last_result(), None);
    }

    #[test]
    fn test_category_load_sets_default_and_ready() {
        let mut state = MenuState::new();
        state.on_categories_loaded(Ok(vec![Category::new("Soup"), Category::new("Rice")]));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.chosen_category(), "Soup");
        assert_eq!(state.chosen_index(), Some(0));
        assert!(state.is_loading());
    }

    #[test]
    fn test_category_load_keeps_earlier_choice() {
        let mut state = MenuState::new();
        state.choose_category("Rice");
        state.on_categories_loaded(Ok(vec![Category::new("Soup"), Category::new("Rice")]));
        assert_eq!(state.chosen_category(), "Rice");
    }

    #[test]
    fn test_failed_load_leaves_lists_empty() {
        let mut state = MenuState::new();
        state.on_categories_loaded(Err(io_failure()));
        state.on_recipes_loaded(Err(io_failure()));

        assert_eq!(state.phase(), Phase::Ready);
        assert!(!state.is_loading());
        assert!(state.categories().is_empty());
        assert!(state.recipes().is_empty());
        assert_eq!(state.chosen_category(), "");
    }

    #[test]
    fn test_lists_are_immutable_after_load() {
        let mut state = soup_state();
        state.on_categories_loaded(Ok(vec![Category::new("Other")]));
        state.on_recipes_loaded(Ok(Vec::new()));

        assert_eq!(state.categories().len(), 2);
        assert_eq!(state.recipes().len(), 2);
    }

    #[test]
    fn test_load_events_in_either_order() {
        let mut state = MenuState::new();
        state.apply_load(LoadEvent::Recipes(Ok(vec![Recipe::new("1", "Miso", "Soup", "M")])));
        assert_eq!(state.phase(), Phase::Uninitialized);
        state.apply_load(LoadEvent::Categories(Ok(vec![Category::new("Soup")])));
        assert_eq!(state.phase(), Phase::Ready);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_randomize_before_recipes_arrive_is_no_match() {
        let mut state = MenuState::new();
        state.on_categories_loaded(Ok(vec![Category::new("Soup")]));
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            state.randomize(MealBucket::Morning, &mut rng).err(),
            Some(PickError::NoMatch)
        );
        assert_eq!(state.last_result(), None);
    }

    #[test]
    fn test_randomize_stores_result() {
        let mut state = soup_state();
        let mut rng = StdRng::seed_from_u64(3);

        let pick = state.randomize(MealBucket::Morning, &mut rng).unwrap();
        assert_eq!(pick.recipe.name, "Miso");
        assert!(!pick.fell_back);
        assert_eq!(state.last_result(), Some("Miso"));
    }

    #[test]
    fn test_failures_leave_result_unchanged() {
        let mut state = soup_state();
        let mut rng = StdRng::seed_from_u64(3);
        state.randomize(MealBucket::Morning, &mut rng).unwrap();

        state.choose_category("Rice");
        assert_eq!(
            state.randomize(MealBucket::Morning, &mut rng).err(),
            Some(PickError::NoMatch)
        );
        assert_eq!(state.last_result(), Some("Miso"));

        state.choose_category("");
        assert_eq!(
            state.randomize(MealBucket::Morning, &mut rng).err(),
            Some(PickError::NoCategory)
        );
        assert_eq!(state.last_result(), Some("Miso"));
    }

    #[test]
    fn test_changing_category_keeps_result() {
        let mut state = soup_state();
        let mut rng = StdRng::seed_from_u64(3);
        state.randomize(MealBucket::Dinner, &mut rng).unwrap();

        assert!(state.choose_category_by_index(1));
        assert_eq!(state.chosen_category(), "Rice");
        assert_eq!(state.last_result(), Some("Consomme"));
        assert!(!state.choose_category_by_index(5));
    }

    #[test]
    fn test_duplicate_names_keep_their_own_rows() {
        let mut state = MenuState::new();
        state.on_categories_loaded(Ok(vec![
            Category::new("Soup"),
            Category::new("Soup"),
            Category::new("Rice"),
        ]));
        assert_eq!(state.chosen_index(), Some(0));

        assert!(state.choose_category_by_index(1));
        assert_eq!(state.chosen_category(), "Soup");
        assert_eq!(state.chosen_index(), Some(1));

        assert!(state.choose_category_by_index(2));
        assert_eq!(state.chosen_category(), "Rice");
        assert_eq!(state.chosen_index(), Some(2));
    }

    #[test]
    fn test_choice_before_load_resolves_to_first_matching_row() {
        let mut state = MenuState::new();
        state.choose_category("Rice");
        assert_eq!(state.chosen_index(), None);

        state.on_categories_loaded(Ok(vec![
            Category::new("Soup"),
            Category::new("Rice"),
            Category::new("Rice"),
        ]));
        assert_eq!(state.chosen_index(), Some(1));
    }

    #[test]
    fn test_unknown_category_has_no_index() {
        let mut state = soup_state();
        state.choose_category("Dessert");
        assert_eq!(state.chosen_index(), None);
    }
}
