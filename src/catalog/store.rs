use std::collections::{BTreeMap, HashMap};

use crate::models::{IngredientAmount, IngredientCategory, MealType, Recipe, RecipeId, Supply};

/// Read-only id lookups the shopping-list engine needs.
///
/// A miss is a normal outcome: plans and catalogs drift apart, and callers
/// decide what an absent record means for them.
pub trait CatalogLookup {
    fn resolve_supply(&self, id: &str) -> Option<&Supply>;

    fn resolve_recipe(&self, id: RecipeId) -> Option<&Recipe>;

    /// A supply that is flagged as a recipe ingredient.
    fn resolve_ingredient(&self, id: &str) -> Option<&Supply> {
        self.resolve_supply(id).filter(|s| s.is_ingredient)
    }
}

/// All supplies keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SupplyCatalog {
    supplies: HashMap<String, Supply>,
}

impl SupplyCatalog {
    /// Build from a list; on duplicate ids the last one wins.
    pub fn new(supplies: Vec<Supply>) -> Self {
        let mut map = HashMap::new();
        for supply in supplies {
            map.insert(supply.id.clone(), supply);
        }
        Self { supplies: map }
    }

    pub fn get(&self, id: &str) -> Option<&Supply> {
        self.supplies.get(id)
    }

    /// All supplies, sorted by id.
    pub fn all(&self) -> Vec<&Supply> {
        let mut all: Vec<&Supply> = self.supplies.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Supplies whose ingredient flag equals `ingredients`, sorted by id.
    pub fn by_kind(&self, ingredients: bool) -> Vec<&Supply> {
        self.all()
            .into_iter()
            .filter(|s| s.is_ingredient == ingredients)
            .collect()
    }

    pub fn ingredients(&self) -> Vec<&Supply> {
        self.by_kind(true)
    }

    pub fn non_ingredients(&self) -> Vec<&Supply> {
        self.by_kind(false)
    }

    pub fn ingredients_by_category(&self) -> BTreeMap<IngredientCategory, Vec<&Supply>> {
        let mut grouped: BTreeMap<IngredientCategory, Vec<&Supply>> = BTreeMap::new();
        for supply in self.ingredients() {
            if let Some(ingredient) = supply.as_ingredient() {
                grouped.entry(ingredient.category).or_default().push(supply);
            }
        }
        grouped
    }

    pub fn len(&self) -> usize {
        self.supplies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplies.is_empty()
    }
}

/// All recipes keyed by id.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<RecipeId, Recipe>,
}

impl RecipeCatalog {
    /// Build from a list; on duplicate ids the last one wins.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes {
            map.insert(recipe.id, recipe);
        }
        Self { recipes: map }
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    /// All recipes, sorted by id.
    pub fn all(&self) -> Vec<&Recipe> {
        let mut all: Vec<&Recipe> = self.recipes.values().collect();
        all.sort_by_key(|r| r.id);
        all
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Dietary filter for recipe listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DietFilter {
    #[default]
    All,
    /// Vegetarian recipes, vegan ones included.
    Vegetarian,
    Vegan,
}

/// A recipe line joined with its supply record, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLine {
    pub supply_id: String,
    pub name: String,
    pub unit: String,
    pub amount: f64,
    /// False when the id is missing from the catalog.
    pub known: bool,
}

/// Supply and recipe catalogs loaded for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub supplies: SupplyCatalog,
    pub recipes: RecipeCatalog,
}

impl CatalogLookup for Catalog {
    fn resolve_supply(&self, id: &str) -> Option<&Supply> {
        self.supplies.get(id)
    }

    fn resolve_recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }
}

impl Catalog {
    pub fn new(supplies: Vec<Supply>, recipes: Vec<Recipe>) -> Self {
        Self {
            supplies: SupplyCatalog::new(supplies),
            recipes: RecipeCatalog::new(recipes),
        }
    }

    /// Every resolvable ingredient of the recipe is vegetarian.
    pub fn is_recipe_vegetarian(&self, recipe: &Recipe) -> bool {
        self.resolved_ingredients(recipe)
            .all(|s| s.is_vegetarian || s.is_vegan)
    }

    /// Every resolvable ingredient of the recipe is vegan.
    pub fn is_recipe_vegan(&self, recipe: &Recipe) -> bool {
        self.resolved_ingredients(recipe).all(|s| s.is_vegan)
    }

    fn resolved_ingredients<'a>(&'a self, recipe: &'a Recipe) -> impl Iterator<Item = &'a Supply> {
        recipe
            .ingredients
            .iter()
            .filter_map(|line| self.resolve_ingredient(&line.id))
    }

    /// Recipes matching an optional meal type and a diet filter, sorted by id.
    pub fn filter_recipes(&self, meal_type: Option<MealType>, diet: DietFilter) -> Vec<&Recipe> {
        self.recipes
            .all()
            .into_iter()
            .filter(|r| meal_type.is_none_or(|m| r.is_meal_type(m)))
            .filter(|r| match diet {
                DietFilter::All => true,
                DietFilter::Vegetarian => self.is_recipe_vegetarian(r),
                DietFilter::Vegan => self.is_recipe_vegan(r),
            })
            .collect()
    }

    /// Join a recipe's lines with the supply catalog.
    ///
    /// Dangling ids produce an "Unknown (<id>)" placeholder line.
    pub fn recipe_ingredient_lines(&self, recipe: &Recipe) -> Vec<ResolvedLine> {
        recipe
            .ingredients
            .iter()
            .map(|line: &IngredientAmount| match self.resolve_ingredient(&line.id) {
                Some(supply) => ResolvedLine {
                    supply_id: line.id.clone(),
                    name: supply.name.clone(),
                    unit: supply.unit.clone(),
                    amount: line.amount,
                    known: true,
                },
                None => ResolvedLine {
                    supply_id: line.id.clone(),
                    name: format!("Unknown ({})", line.id),
                    unit: String::new(),
                    amount: line.amount,
                    known: false,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(id: &str, is_ingredient: bool, vegetarian: bool, vegan: bool) -> Supply {
        Supply {
            id: id.to_string(),
            name: id.to_uppercase(),
            unit: "kg".to_string(),
            is_ingredient,
            category: is_ingredient.then(|| "inne".to_string()),
            is_vegetarian: vegetarian,
            is_vegan: vegan,
            freshness_days: 7,
            storage_type: None,
        }
    }

    fn recipe(id: RecipeId, meal: MealType, lines: &[(&str, f64)]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            description: String::new(),
            meal_type: vec![meal],
            difficulty: 1,
            ingredients: lines.iter().map(|(s, a)| IngredientAmount::new(*s, *a)).collect(),
            instructions: vec![],
            equipment: vec![],
            developed_by: None,
            taste_score: None,
            preparation_time: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                supply("oats", true, true, true),
                supply("milk", true, true, false),
                supply("ham", true, false, false),
                supply("gas", false, false, false),
            ],
            vec![
                recipe(1, MealType::Breakfast, &[("oats", 0.1)]),
                recipe(2, MealType::Breakfast, &[("oats", 0.1), ("milk", 0.2)]),
                recipe(3, MealType::Dinner, &[("ham", 0.2), ("ghost", 1.0)]),
            ],
        )
    }

    #[test]
    fn test_resolve_ingredient_skips_non_ingredients() {
        let catalog = sample_catalog();
        assert!(catalog.resolve_supply("gas").is_some());
        assert!(catalog.resolve_ingredient("gas").is_none());
        assert!(catalog.resolve_ingredient("oats").is_some());
        assert!(catalog.resolve_ingredient("ghost").is_none());
    }

    #[test]
    fn test_by_kind() {
        let catalog = sample_catalog();
        assert_eq!(catalog.supplies.ingredients().len(), 3);
        assert_eq!(catalog.supplies.non_ingredients().len(), 1);
    }

    #[test]
    fn test_ingredients_by_category() {
        let mut catalog = sample_catalog();
        let mut cheese = supply("cheese", true, true, false);
        cheese.category = Some("nabiał".to_string());
        catalog.supplies = SupplyCatalog::new(
            catalog.supplies.all().into_iter().cloned().chain([cheese]).collect(),
        );

        let grouped = catalog.supplies.ingredients_by_category();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&IngredientCategory::Dairy][0].id, "cheese");
        assert_eq!(grouped[&IngredientCategory::Other].len(), 3);
        assert!(grouped.values().flatten().all(|s| s.id != "gas"));
    }

    #[test]
    fn test_diet_filters() {
        let catalog = sample_catalog();
        let ids = |recipes: Vec<&Recipe>| recipes.iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(catalog.filter_recipes(None, DietFilter::All)), vec![1, 2, 3]);
        assert_eq!(ids(catalog.filter_recipes(None, DietFilter::Vegetarian)), vec![1, 2]);
        assert_eq!(ids(catalog.filter_recipes(None, DietFilter::Vegan)), vec![1]);
        assert_eq!(
            ids(catalog.filter_recipes(Some(MealType::Dinner), DietFilter::All)),
            vec![3]
        );
    }

    #[test]
    fn test_recipe_ingredient_lines_marks_unknown() {
        let catalog = sample_catalog();
        let recipe = catalog.recipes.get(3).unwrap();
        let lines = catalog.recipe_ingredient_lines(recipe);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].known);
        assert_eq!(lines[0].name, "HAM");
        assert!(!lines[1].known);
        assert_eq!(lines[1].name, "Unknown (ghost)");
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let mut first = supply("salt", true, true, true);
        first.name = "Old".to_string();
        let mut second = supply("salt", true, true, true);
        second.name = "New".to_string();

        let catalog = SupplyCatalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("salt").unwrap().name, "New");
    }
}
