use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::models::{AggregatedItem, AmountSource, Cruise, IngredientCategory, ShoppingList, Supply};
use crate::shopping::collation::polish_cmp;
use crate::shopping::constants::{INGREDIENT_FALLBACK_CATEGORY, SUPPLY_FALLBACK_CATEGORY};

/// Bucket labels for supplies that carry no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingConfig {
    /// Used for ingredients without a category.
    pub ingredient_fallback: String,

    /// Used for non-ingredient supplies without a category.
    pub supply_fallback: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            ingredient_fallback: INGREDIENT_FALLBACK_CATEGORY.to_string(),
            supply_fallback: SUPPLY_FALLBACK_CATEGORY.to_string(),
        }
    }
}

/// Get-or-insert `key`, then apply `update` to the stored value.
pub fn upsert_with<K, V, M, U>(map: &mut BTreeMap<K, V>, key: K, make: M, update: U)
where
    K: Ord,
    M: FnOnce() -> V,
    U: FnOnce(&mut V),
{
    update(map.entry(key).or_insert_with(make));
}

/// Category label a supply is listed under.
///
/// Ingredient categories are normalised to the closed category set, so
/// English aliases share a bucket with the catalog label. Missing, unknown
/// and `Other` categories all go to the ingredient fallback.
pub fn category_for(supply: &Supply, config: &GroupingConfig) -> String {
    if let Some(ingredient) = supply.as_ingredient() {
        return match ingredient.category {
            IngredientCategory::Other => config.ingredient_fallback.clone(),
            category => category.label().to_string(),
        };
    }
    match &supply.category {
        Some(category) => category.clone(),
        None => config.supply_fallback.clone(),
    }
}

fn add_source(
    items: &mut BTreeMap<String, AggregatedItem>,
    supply: &Supply,
    source: AmountSource,
) {
    upsert_with(
        items,
        supply.id.clone(),
        || AggregatedItem::new(supply.clone()),
        |item| item.push_source(source),
    );
}

/// Merge every recipe-derived and manual quantity of a cruise, keyed by supply id.
///
/// Recipe lines are scaled by crew size, manual entries are taken as-is.
/// Recipes or supplies missing from the catalog are left out.
pub fn collect_items<C>(cruise: &Cruise, catalog: &C) -> BTreeMap<String, AggregatedItem>
where
    C: CatalogLookup + ?Sized,
{
    let mut items: BTreeMap<String, AggregatedItem> = BTreeMap::new();
    let crew = cruise.crew as f64;

    for day in &cruise.days {
        for &recipe_id in &day.recipes {
            let Some(recipe) = catalog.resolve_recipe(recipe_id) else {
                debug!(cruise_id = %cruise.id, day = day.day_number, recipe_id, "skipping unknown recipe");
                continue;
            };

            for line in &recipe.ingredients {
                let Some(supply) = catalog.resolve_ingredient(&line.id) else {
                    debug!(recipe_id, supply_id = %line.id, "skipping unknown ingredient");
                    continue;
                };

                let source = AmountSource::Recipe {
                    amount: line.amount * crew,
                    per_person: line.amount,
                    recipe_id,
                    recipe_name: recipe.name.clone(),
                    day_number: day.day_number,
                };
                add_source(&mut items, supply, source);
            }
        }
    }

    for entry in &cruise.additional_supplies {
        let Some(supply) = catalog.resolve_supply(&entry.id) else {
            debug!(cruise_id = %cruise.id, supply_id = %entry.id, "skipping unknown supply");
            continue;
        };
        add_source(
            &mut items,
            supply,
            AmountSource::Additional {
                amount: entry.amount,
            },
        );
    }

    items
}

/// Group merged items by category and sort each group by display name.
pub fn group_by_category<I>(items: I, config: &GroupingConfig) -> ShoppingList
where
    I: IntoIterator<Item = AggregatedItem>,
{
    let mut categories: BTreeMap<String, Vec<AggregatedItem>> = BTreeMap::new();
    for item in items {
        categories
            .entry(category_for(&item.supply, config))
            .or_default()
            .push(item);
    }

    for group in categories.values_mut() {
        group.sort_by(|a, b| {
            polish_cmp(&a.supply.name, &b.supply.name).then_with(|| a.supply.id.cmp(&b.supply.id))
        });
    }

    ShoppingList { categories }
}

/// Build the shopping list of a cruise.
///
/// Pure function of the cruise snapshot and the catalog: nothing is
/// mutated and dangling references never raise.
pub fn aggregate_shopping_list<C>(cruise: &Cruise, catalog: &C, config: &GroupingConfig) -> ShoppingList
where
    C: CatalogLookup + ?Sized,
{
    let items = collect_items(cruise, catalog);
    let list = group_by_category(items.into_values(), config);
    debug!(
        cruise_id = %cruise.id,
        items = list.len(),
        categories = list.categories.len(),
        "shopping list aggregated"
    );
    list
}
