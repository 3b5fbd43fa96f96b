mod persistence;
mod store;

pub use persistence::{load_catalog, load_recipes, load_supplies};
pub use store::{
    Catalog, CatalogLookup, DietFilter, RecipeCatalog, ResolvedLine, SupplyCatalog,
};
