use serde::{Deserialize, Serialize};

use crate::models::RecipeId;

/// One day of a cruise with the recipes planned for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruiseDay {
    /// 1-based day number.
    pub day_number: u32,

    /// Planned recipe ids. Duplicates are allowed.
    #[serde(default)]
    pub recipes: Vec<RecipeId>,
}

impl CruiseDay {
    pub fn empty(day_number: u32) -> Self {
        Self {
            day_number,
            recipes: Vec::new(),
        }
    }
}

/// A manually specified, unscaled quantity of a supply to buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CruiseSupplyEntry {
    /// Supply id.
    pub id: String,

    pub amount: f64,
}

impl CruiseSupplyEntry {
    pub fn new(id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// A planned voyage: day-by-day meal assignment plus manual extra purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cruise {
    pub id: String,

    pub name: String,

    /// RFC 3339 creation timestamp.
    pub date_created: String,

    /// RFC 3339 timestamp of the last save.
    pub date_modified: String,

    /// Number of days, at least 1.
    pub length: u32,

    /// Headcount used to scale recipe quantities, at least 1.
    pub crew: u32,

    pub days: Vec<CruiseDay>,

    #[serde(default)]
    pub additional_supplies: Vec<CruiseSupplyEntry>,
}

/// Empty day plan for days `1..=length`.
pub fn empty_days(length: u32) -> Vec<CruiseDay> {
    (1..=length).map(CruiseDay::empty).collect()
}

impl Cruise {
    pub fn day(&self, day_number: u32) -> Option<&CruiseDay> {
        self.days.iter().find(|d| d.day_number == day_number)
    }

    pub fn day_mut(&mut self, day_number: u32) -> Option<&mut CruiseDay> {
        self.days.iter_mut().find(|d| d.day_number == day_number)
    }

    pub fn additional_supply(&self, supply_id: &str) -> Option<&CruiseSupplyEntry> {
        self.additional_supplies.iter().find(|s| s.id == supply_id)
    }

    /// Total number of planned recipe occurrences across all days.
    pub fn planned_recipe_count(&self) -> usize {
        self.days.iter().map(|d| d.recipes.len()).sum()
    }

    /// Check the structural invariants: one day per day number `1..=length`,
    /// positive length and crew, unique additional supply ids and
    /// non-negative amounts.
    pub fn is_valid(&self) -> bool {
        let days_ok = self.days.len() == self.length as usize
            && self
                .days
                .iter()
                .enumerate()
                .all(|(i, d)| d.day_number as usize == i + 1);

        let mut ids: Vec<&str> = self.additional_supplies.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();

        self.length >= 1
            && self.crew >= 1
            && days_ok
            && ids.len() == before
            && self.additional_supplies.iter().all(|s| s.amount >= 0.0)
    }
}
