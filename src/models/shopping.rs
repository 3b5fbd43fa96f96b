use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{RecipeId, Supply};

/// Where part of an item's quantity comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AmountSource {
    /// One occurrence of a recipe on one day, already scaled by crew size.
    #[serde(rename_all = "camelCase")]
    Recipe {
        amount: f64,
        per_person: f64,
        recipe_id: RecipeId,
        recipe_name: String,
        day_number: u32,
    },

    /// A manual entry from the cruise's additional supplies, never scaled.
    Additional { amount: f64 },
}

impl AmountSource {
    pub fn amount(&self) -> f64 {
        match self {
            AmountSource::Recipe { amount, .. } | AmountSource::Additional { amount } => *amount,
        }
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, AmountSource::Recipe { .. })
    }
}

/// One shopping-list line: total quantity plus every contribution to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedItem {
    pub supply: Supply,
    pub total_amount: f64,
    pub sources: Vec<AmountSource>,
}

impl AggregatedItem {
    pub fn new(supply: Supply) -> Self {
        Self {
            supply,
            total_amount: 0.0,
            sources: Vec::new(),
        }
    }

    /// Add a contribution, keeping the total in step with the sources.
    pub fn push_source(&mut self, source: AmountSource) {
        self.total_amount += source.amount();
        self.sources.push(source);
    }

    pub fn recipe_sources(&self) -> impl Iterator<Item = &AmountSource> {
        self.sources.iter().filter(|s| s.is_recipe())
    }
}

/// Shopping list grouped by category label.
///
/// Categories iterate in byte order of their labels; items inside a
/// category are already sorted by display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub categories: BTreeMap<String, Vec<AggregatedItem>>,
}

impl ShoppingList {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn items(&self, category: &str) -> &[AggregatedItem] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All items with their category, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AggregatedItem)> {
        self.categories
            .iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (category.as_str(), item)))
    }

    pub fn find(&self, supply_id: &str) -> Option<&AggregatedItem> {
        self.iter()
            .map(|(_, item)| item)
            .find(|item| item.supply.id == supply_id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
