use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Recipe, Supply};

/// Read a JSON array and keep the records that parse and pass `is_valid`.
///
/// A malformed file is an error; a malformed record is skipped with a warning.
fn load_records<T, V>(path: &Path, kind: &str, is_valid: V) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    V: Fn(&T) -> bool,
{
    let content = fs::read_to_string(path)?;
    let raw: Vec<Value> = serde_json::from_str(&content)?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let id = value.get("id").map(Value::to_string).unwrap_or_default();
        match serde_json::from_value::<T>(value) {
            Ok(record) if is_valid(&record) => records.push(record),
            Ok(_) => warn!(kind, index, %id, "skipping invalid record"),
            Err(e) => warn!(kind, index, %id, error = %e, "skipping unreadable record"),
        }
    }
    Ok(records)
}

/// Load supplies from a JSON array.
///
/// Records that do not parse or fail [`Supply::is_valid`] are skipped with a warning.
pub fn load_supplies<P: AsRef<Path>>(path: P) -> Result<Vec<Supply>> {
    load_records(path.as_ref(), "supply", Supply::is_valid)
}

/// Load recipes from a JSON array.
///
/// Records that do not parse or fail [`Recipe::is_valid`] are skipped with a warning.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    load_records(path.as_ref(), "recipe", Recipe::is_valid)
}

/// Load both catalogs.
pub fn load_catalog<P: AsRef<Path>, Q: AsRef<Path>>(supplies: P, recipes: Q) -> Result<Catalog> {
    let catalog = Catalog::new(load_supplies(supplies)?, load_recipes(recipes)?);
    info!(
        supplies = catalog.supplies.len(),
        recipes = catalog.recipes.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
