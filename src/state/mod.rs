mod manager;
mod persistence;
mod repository;

pub use manager::{generate_cruise_id, new_cruise, now_rfc3339, CruisePlanner};
pub use persistence::{load_cruises, migrate_cruises, save_cruises, JsonCruiseStore};
pub use repository::{upsert_by, CruiseRepository, MemoryCruiseStore};
