use rand::Rng;
use tracing::info;

use crate::catalog::CatalogLookup;
use crate::error::{ProvisionError, Result};
use crate::models::{empty_days, Cruise, CruiseSupplyEntry, RecipeId, ShoppingList};
use crate::shopping::{aggregate_shopping_list, GroupingConfig};
use crate::state::repository::{upsert_by, CruiseRepository};

/// Current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Cruise id: epoch milliseconds plus a random six-digit suffix.
pub fn generate_cruise_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}{:06}", millis, suffix)
}

/// Build a new cruise with one empty day per day number.
pub fn new_cruise(name: &str, length: u32, crew: u32) -> Result<Cruise> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProvisionError::InvalidInput("Cruise name cannot be empty".to_string()));
    }
    if length < 1 {
        return Err(ProvisionError::InvalidInput("Cruise length must be at least 1 day".to_string()));
    }
    if crew < 1 {
        return Err(ProvisionError::InvalidInput("Crew must have at least 1 member".to_string()));
    }

    let now = now_rfc3339();
    Ok(Cruise {
        id: generate_cruise_id(),
        name: name.to_string(),
        date_created: now.clone(),
        date_modified: now,
        length,
        crew,
        days: empty_days(length),
        additional_supplies: Vec::new(),
    })
}

fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ProvisionError::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            amount
        )))
    }
}

/// Cruise mutations on top of a repository.
///
/// Every operation loads the cruise, changes it and writes it back.
pub struct CruisePlanner<R> {
    repo: R,
}

impl<R: CruiseRepository> CruisePlanner<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    pub fn list_cruises(&self) -> Result<Vec<Cruise>> {
        self.repo.list()
    }

    /// Get a cruise, failing if it does not exist.
    pub fn get_cruise(&self, cruise_id: &str) -> Result<Cruise> {
        self.repo
            .get_by_id(cruise_id)?
            .ok_or_else(|| ProvisionError::CruiseNotFound(cruise_id.to_string()))
    }

    pub fn create_cruise(&mut self, name: &str, length: u32, crew: u32) -> Result<Cruise> {
        let cruise = new_cruise(name, length, crew)?;
        self.repo.upsert(cruise.clone())?;
        info!(cruise_id = %cruise.id, name = %cruise.name, length, crew, "cruise created");
        Ok(cruise)
    }

    pub fn delete_cruise(&mut self, cruise_id: &str) -> Result<()> {
        if !self.repo.delete(cruise_id)? {
            return Err(ProvisionError::CruiseNotFound(cruise_id.to_string()));
        }
        info!(cruise_id, "cruise deleted");
        Ok(())
    }

    fn modify<T, F>(&mut self, cruise_id: &str, change: F) -> Result<T>
    where
        F: FnOnce(&mut Cruise) -> Result<T>,
    {
        let mut cruise = self.get_cruise(cruise_id)?;
        let outcome = change(&mut cruise)?;
        self.repo.upsert(cruise)?;
        Ok(outcome)
    }

    /// Plan a recipe on a day. Returns false if it was already planned there.
    pub fn add_recipe_to_day(&mut self, cruise_id: &str, day: u32, recipe_id: RecipeId) -> Result<bool> {
        self.modify(cruise_id, |cruise| {
            let plan = cruise.day_mut(day).ok_or_else(|| ProvisionError::DayNotFound {
                cruise_id: cruise_id.to_string(),
                day,
            })?;
            if plan.recipes.contains(&recipe_id) {
                return Ok(false);
            }
            plan.recipes.push(recipe_id);
            Ok(true)
        })
    }

    /// Remove every occurrence of a recipe from a day. Returns how many were removed.
    pub fn remove_recipe_from_day(
        &mut self,
        cruise_id: &str,
        day: u32,
        recipe_id: RecipeId,
    ) -> Result<usize> {
        self.modify(cruise_id, |cruise| {
            let plan = cruise.day_mut(day).ok_or_else(|| ProvisionError::DayNotFound {
                cruise_id: cruise_id.to_string(),
                day,
            })?;
            let before = plan.recipes.len();
            plan.recipes.retain(|id| *id != recipe_id);
            Ok(before - plan.recipes.len())
        })
    }

    /// Add a supply to the additional list, replacing the amount if it is already there.
    pub fn add_additional_supply(&mut self, cruise_id: &str, supply_id: &str, amount: f64) -> Result<()> {
        check_amount(amount)?;
        self.modify(cruise_id, |cruise| {
            let (entry, _) = upsert_by(
                &mut cruise.additional_supplies,
                |s| s.id == supply_id,
                || CruiseSupplyEntry::new(supply_id, amount),
            );
            entry.amount = amount;
            Ok(())
        })
    }

    /// Change the amount of a supply already on the additional list.
    pub fn update_additional_supply_amount(
        &mut self,
        cruise_id: &str,
        supply_id: &str,
        amount: f64,
    ) -> Result<()> {
        check_amount(amount)?;
        self.modify(cruise_id, |cruise| {
            let entry = cruise
                .additional_supplies
                .iter_mut()
                .find(|s| s.id == supply_id)
                .ok_or_else(|| ProvisionError::SupplyNotInCruise {
                    cruise_id: cruise_id.to_string(),
                    supply_id: supply_id.to_string(),
                })?;
            entry.amount = amount;
            Ok(())
        })
    }

    /// Remove a supply from the additional list. Returns whether it was there.
    pub fn remove_additional_supply(&mut self, cruise_id: &str, supply_id: &str) -> Result<bool> {
        self.modify(cruise_id, |cruise| {
            let before = cruise.additional_supplies.len();
            cruise.additional_supplies.retain(|s| s.id != supply_id);
            Ok(cruise.additional_supplies.len() != before)
        })
    }

    /// Aggregate the shopping list of a stored cruise.
    pub fn shopping_list<C>(
        &self,
        cruise_id: &str,
        catalog: &C,
        config: &GroupingConfig,
    ) -> Result<ShoppingList>
    where
        C: CatalogLookup + ?Sized,
    {
        self.cruise_with_shopping_list(cruise_id, catalog, config)
            .map(|(_, list)| list)
    }

    /// The cruise and its shopping list, from a single read of the store.
    pub fn cruise_with_shopping_list<C>(
        &self,
        cruise_id: &str,
        catalog: &C,
        config: &GroupingConfig,
    ) -> Result<(Cruise, ShoppingList)>
    where
        C: CatalogLookup + ?Sized,
    {
        let cruise = self.get_cruise(cruise_id)?;
        let list = aggregate_shopping_list(&cruise, catalog, config);
        Ok((cruise, list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryCruiseStore;

    fn planner_with_cruise() -> (CruisePlanner<MemoryCruiseStore>, String) {
        let mut planner = CruisePlanner::new(MemoryCruiseStore::default());
        let cruise = planner.create_cruise("Bałtyk", 3, 4).unwrap();
        (planner, cruise.id)
    }

    #[test]
    fn test_new_cruise_validation() {
        assert!(new_cruise("  ", 3, 4).is_err());
        assert!(new_cruise("Rejs", 0, 4).is_err());
        assert!(new_cruise("Rejs", 3, 0).is_err());

        let cruise = new_cruise(" Rejs ", 3, 4).unwrap();
        assert_eq!(cruise.name, "Rejs");
        assert_eq!(cruise.days.len(), 3);
        assert!(cruise.is_valid());
    }

    #[test]
    fn test_add_recipe_to_day_is_idempotent() {
        let (mut planner, id) = planner_with_cruise();
        assert!(planner.add_recipe_to_day(&id, 2, 7).unwrap());
        assert!(!planner.add_recipe_to_day(&id, 2, 7).unwrap());
        assert!(planner.add_recipe_to_day(&id, 3, 7).unwrap());

        let cruise = planner.get_cruise(&id).unwrap();
        assert_eq!(cruise.day(2).unwrap().recipes, vec![7]);
        assert_eq!(cruise.planned_recipe_count(), 2);
    }

    #[test]
    fn test_unknown_day_and_cruise() {
        let (mut planner, id) = planner_with_cruise();
        assert!(matches!(
            planner.add_recipe_to_day(&id, 9, 1),
            Err(ProvisionError::DayNotFound { day: 9, .. })
        ));
        assert!(matches!(
            planner.add_recipe_to_day("nope", 1, 1),
            Err(ProvisionError::CruiseNotFound(_))
        ));
    }

    #[test]
    fn test_remove_recipe_from_day() {
        let (mut planner, id) = planner_with_cruise();
        planner.add_recipe_to_day(&id, 1, 3).unwrap();
        planner.add_recipe_to_day(&id, 1, 4).unwrap();

        assert_eq!(planner.remove_recipe_from_day(&id, 1, 3).unwrap(), 1);
        assert_eq!(planner.remove_recipe_from_day(&id, 1, 3).unwrap(), 0);
        assert_eq!(planner.get_cruise(&id).unwrap().day(1).unwrap().recipes, vec![4]);
    }

    #[test]
    fn test_additional_supplies_upsert() {
        let (mut planner, id) = planner_with_cruise();
        planner.add_additional_supply(&id, "woda", 10.0).unwrap();
        planner.add_additional_supply(&id, "woda", 24.0).unwrap();
        planner.add_additional_supply(&id, "gaz", 1.0).unwrap();

        let cruise = planner.get_cruise(&id).unwrap();
        assert_eq!(cruise.additional_supplies.len(), 2);
        assert_eq!(cruise.additional_supply("woda").unwrap().amount, 24.0);
        assert!(cruise.is_valid());
    }

    #[test]
    fn test_update_and_remove_additional_supply() {
        let (mut planner, id) = planner_with_cruise();
        planner.add_additional_supply(&id, "woda", 10.0).unwrap();

        planner.update_additional_supply_amount(&id, "woda", 0.0).unwrap();
        assert_eq!(
            planner.get_cruise(&id).unwrap().additional_supply("woda").unwrap().amount,
            0.0
        );

        assert!(matches!(
            planner.update_additional_supply_amount(&id, "gaz", 1.0),
            Err(ProvisionError::SupplyNotInCruise { .. })
        ));
        assert!(matches!(
            planner.add_additional_supply(&id, "woda", -1.0),
            Err(ProvisionError::InvalidInput(_))
        ));

        assert!(planner.remove_additional_supply(&id, "woda").unwrap());
        assert!(!planner.remove_additional_supply(&id, "woda").unwrap());
    }

    struct CountingStore {
        inner: MemoryCruiseStore,
        reads: std::cell::Cell<usize>,
    }

    impl CruiseRepository for CountingStore {
        fn list(&self) -> Result<Vec<Cruise>> {
            self.reads.set(self.reads.get() + 1);
            self.inner.list()
        }

        fn upsert(&mut self, cruise: Cruise) -> Result<()> {
            self.inner.upsert(cruise)
        }

        fn delete(&mut self, id: &str) -> Result<bool> {
            self.inner.delete(id)
        }
    }

    #[test]
    fn test_cruise_with_shopping_list_reads_once() {
        let (planner, id) = planner_with_cruise();
        let planner = CruisePlanner::new(CountingStore {
            inner: planner.into_inner(),
            reads: std::cell::Cell::new(0),
        });

        let catalog = crate::catalog::Catalog::default();
        let (cruise, list) = planner
            .cruise_with_shopping_list(&id, &catalog, &GroupingConfig::default())
            .unwrap();
        assert_eq!(cruise.crew, 4);
        assert!(list.is_empty());
        assert_eq!(planner.repository().reads.get(), 1);

        assert!(matches!(
            planner.cruise_with_shopping_list("nope", &catalog, &GroupingConfig::default()),
            Err(ProvisionError::CruiseNotFound(_))
        ));
    }

    #[test]
    fn test_delete_cruise() {
        let (mut planner, id) = planner_with_cruise();
        planner.delete_cruise(&id).unwrap();
        assert!(matches!(
            planner.delete_cruise(&id),
            Err(ProvisionError::CruiseNotFound(_))
        ));
    }
}
