use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{empty_days, Cruise, CruiseDay, CruiseSupplyEntry};
use crate::state::repository::{upsert_cruise, CruiseRepository};

/// Cruise record as found on disk, possibly written before the day plan
/// and additional supplies existed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCruise {
    id: String,
    name: String,
    #[serde(default)]
    date_created: String,
    #[serde(default)]
    date_modified: String,
    length: u32,
    crew: u32,
    #[serde(default)]
    days: Option<Vec<CruiseDay>>,
    #[serde(default)]
    additional_supplies: Option<Vec<CruiseSupplyEntry>>,
}

impl StoredCruise {
    /// Backfill missing fields. Returns the cruise and whether anything changed.
    fn migrate(self) -> (Cruise, bool) {
        let mut changed = false;

        let days = self.days.unwrap_or_else(|| {
            changed = true;
            empty_days(self.length)
        });
        let additional_supplies = self.additional_supplies.unwrap_or_else(|| {
            changed = true;
            Vec::new()
        });

        let cruise = Cruise {
            id: self.id,
            name: self.name,
            date_created: self.date_created,
            date_modified: self.date_modified,
            length: self.length,
            crew: self.crew,
            days,
            additional_supplies,
        };
        (cruise, changed)
    }
}

/// Parse a stored cruise collection, backfilling records from older versions.
///
/// Returns the cruises and whether any record had to be migrated.
pub fn migrate_cruises(json: &str) -> Result<(Vec<Cruise>, bool)> {
    let stored: Vec<StoredCruise> = serde_json::from_str(json)?;
    let mut migrated = false;
    let cruises = stored
        .into_iter()
        .map(|record| {
            let (cruise, changed) = record.migrate();
            if changed {
                info!(cruise_id = %cruise.id, "migrated cruise record");
            }
            migrated |= changed;
            cruise
        })
        .collect();
    Ok((cruises, migrated))
}

/// Load cruises from a JSON file. A missing file is an empty collection.
pub fn load_cruises<P: AsRef<Path>>(path: P) -> Result<Vec<Cruise>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let (cruises, migrated) = migrate_cruises(&content)?;
    if migrated {
        save_cruises(path, &cruises)?;
    }

    for cruise in cruises.iter().filter(|c| !c.is_valid()) {
        warn!(cruise_id = %cruise.id, "stored cruise violates its invariants");
    }

    Ok(cruises)
}

/// Save cruises to a JSON file.
pub fn save_cruises<P: AsRef<Path>>(path: P, cruises: &[Cruise]) -> Result<()> {
    let json = serde_json::to_string_pretty(cruises)?;
    fs::write(path, json)?;
    Ok(())
}

/// Cruise collection kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonCruiseStore {
    path: PathBuf,
}

impl JsonCruiseStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CruiseRepository for JsonCruiseStore {
    fn list(&self) -> Result<Vec<Cruise>> {
        load_cruises(&self.path)
    }

    fn upsert(&mut self, cruise: Cruise) -> Result<()> {
        let mut cruises = load_cruises(&self.path)?;
        upsert_cruise(&mut cruises, cruise, chrono::Utc::now().to_rfc3339());
        save_cruises(&self.path, &cruises)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut cruises = load_cruises(&self.path)?;
        let before = cruises.len();
        cruises.retain(|c| c.id != id);
        let removed = cruises.len() != before;
        if removed {
            save_cruises(&self.path, &cruises)?;
        }
        Ok(removed)
    }
}
