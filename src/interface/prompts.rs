use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::{Catalog, CatalogLookup};
use crate::error::{ProvisionError, Result};
use crate::models::RecipeId;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered to the user.
const FUZZY_MAX_CHOICES: usize = 5;

/// Prompt for the name of a new cruise.
pub fn prompt_cruise_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Cruise name")
        .interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Err(ProvisionError::InvalidInput("Cruise name cannot be empty".to_string()));
    }
    Ok(name)
}

fn prompt_positive(prompt: &str, default: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ProvisionError::InvalidInput(format!(
            "Expected a whole number of at least 1, got '{}'",
            input.trim()
        ))),
    }
}

/// Prompt for cruise length in days.
pub fn prompt_cruise_length() -> Result<u32> {
    prompt_positive("How many days does the cruise last?", "7")
}

/// Prompt for crew size.
pub fn prompt_crew() -> Result<u32> {
    prompt_positive("How many crew members?", "4")
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick one key among `(key, display name)` candidates matching `input`.
///
/// Exact (case-insensitive) name matches win; otherwise the user confirms
/// or selects among fuzzy matches. `None` means nothing was chosen.
fn pick_by_name(input: &str, candidates: &[(String, String)]) -> Result<Option<String>> {
    let needle = input.trim().to_lowercase();

    if let Some((key, _)) = candidates.iter().find(|(_, name)| name.to_lowercase() == needle) {
        return Ok(Some(key.clone()));
    }

    let mut scored: Vec<(&(String, String), f64)> = candidates
        .iter()
        .map(|c| (c, jaro_winkler(&c.1.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    match scored.as_slice() {
        [] => Ok(None),
        [((key, name), _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| key.clone()))
        }
        many => {
            let options: Vec<&(String, String)> =
                many.iter().take(FUZZY_MAX_CHOICES).map(|(c, _)| *c).collect();
            let mut labels: Vec<String> = options.iter().map(|(_, name)| name.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).map(|(key, _)| key.clone()))
        }
    }
}

/// Resolve a recipe given by numeric id or by (fuzzy) name.
pub fn resolve_recipe_input(catalog: &Catalog, input: &str) -> Result<RecipeId> {
    if let Ok(id) = input.trim().parse::<RecipeId>() {
        return catalog
            .resolve_recipe(id)
            .map(|r| r.id)
            .ok_or_else(|| ProvisionError::RecipeNotFound(input.to_string()));
    }

    let candidates: Vec<(String, String)> = catalog
        .recipes
        .all()
        .into_iter()
        .map(|r| (r.id.to_string(), r.name.clone()))
        .collect();

    pick_by_name(input, &candidates)?
        .and_then(|key| key.parse().ok())
        .ok_or_else(|| ProvisionError::RecipeNotFound(input.to_string()))
}

/// Resolve a supply given by id or by (fuzzy) name.
pub fn resolve_supply_input(catalog: &Catalog, input: &str) -> Result<String> {
    if let Some(supply) = catalog.resolve_supply(input.trim()) {
        return Ok(supply.id.clone());
    }

    let candidates: Vec<(String, String)> = catalog
        .supplies
        .all()
        .into_iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();

    pick_by_name(input, &candidates)?
        .ok_or_else(|| ProvisionError::SupplyNotFound(input.to_string()))
}
