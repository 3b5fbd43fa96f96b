use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of ingredient categories.
///
/// Serialized with the catalog's Polish labels; English names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientCategory {
    #[serde(rename = "nabiał", alias = "dairy")]
    Dairy,
    #[serde(rename = "mięso", alias = "meat")]
    Meat,
    #[serde(rename = "warzywa", alias = "vegetables")]
    Vegetables,
    #[serde(rename = "owoce", alias = "fruit")]
    Fruit,
    #[serde(rename = "pieczywo", alias = "bread")]
    Bread,
    #[serde(rename = "zboża", alias = "grains")]
    Grains,
    #[serde(rename = "przyprawy", alias = "spices")]
    Spices,
    #[serde(rename = "tłuszcze", alias = "fats")]
    Fats,
    #[serde(rename = "inne", alias = "other")]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 9] = [
        IngredientCategory::Dairy,
        IngredientCategory::Meat,
        IngredientCategory::Vegetables,
        IngredientCategory::Fruit,
        IngredientCategory::Bread,
        IngredientCategory::Grains,
        IngredientCategory::Spices,
        IngredientCategory::Fats,
        IngredientCategory::Other,
    ];

    /// Catalog label used as the shopping-list bucket name.
    pub fn label(self) -> &'static str {
        match self {
            IngredientCategory::Dairy => "nabiał",
            IngredientCategory::Meat => "mięso",
            IngredientCategory::Vegetables => "warzywa",
            IngredientCategory::Fruit => "owoce",
            IngredientCategory::Bread => "pieczywo",
            IngredientCategory::Grains => "zboża",
            IngredientCategory::Spices => "przyprawy",
            IngredientCategory::Fats => "tłuszcze",
            IngredientCategory::Other => "inne",
        }
    }

    /// Parse either the catalog label or the English name.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            c.label() == lower || format!("{:?}", c).to_lowercase() == lower
        })
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an ingredient has to be kept on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Room,
    Fridge,
    Freezer,
}

/// Any purchasable item, ingredient or not.
///
/// Ingredient metadata is carried as defaulted fields and is only meaningful
/// when `is_ingredient` is set; read it through [`Supply::as_ingredient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: String,

    pub name: String,

    pub unit: String,

    #[serde(default)]
    pub is_ingredient: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default)]
    pub is_vegan: bool,

    #[serde(default)]
    pub freshness_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
}

/// Borrowed view of a supply that is known to be an ingredient.
#[derive(Debug, Clone, Copy)]
pub struct Ingredient<'a> {
    pub supply: &'a Supply,
    pub category: IngredientCategory,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub freshness_days: u32,
    pub storage_type: StorageType,
}

impl Supply {
    /// Ingredient refinement, `None` for non-ingredient supplies.
    ///
    /// An ingredient with a missing or unknown category reads as `Other`;
    /// a missing storage type reads as `Room`.
    pub fn as_ingredient(&self) -> Option<Ingredient<'_>> {
        if !self.is_ingredient {
            return None;
        }
        Some(Ingredient {
            supply: self,
            category: self
                .category
                .as_deref()
                .and_then(IngredientCategory::parse)
                .unwrap_or(IngredientCategory::Other),
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            freshness_days: self.freshness_days,
            storage_type: self.storage_type.unwrap_or(StorageType::Room),
        })
    }

    /// Basic validation: non-empty id, name and unit.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty() && !self.unit.trim().is_empty()
    }
}
