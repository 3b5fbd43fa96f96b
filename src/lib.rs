pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod shopping;
pub mod state;

pub use catalog::{Catalog, CatalogLookup};
pub use error::{ProvisionError, Result};
pub use models::{AggregatedItem, AmountSource, Cruise, Recipe, ShoppingList, Supply};
pub use shopping::{aggregate_shopping_list, explain, GroupingConfig};
