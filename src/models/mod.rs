mod cruise;
mod recipe;
mod shopping;
mod supply;

pub use cruise::{empty_days, Cruise, CruiseDay, CruiseSupplyEntry};
pub use recipe::{IngredientAmount, MealType, Recipe, RecipeId};
pub use shopping::{AggregatedItem, AmountSource, ShoppingList};
pub use supply::{Ingredient, IngredientCategory, StorageType, Supply};
