use crate::error::Result;
use crate::models::Cruise;

/// Storage for the cruise collection.
///
/// The shopping-list engine only ever sees what `get_by_id` returns; how
/// and where cruises are kept is up to the implementation.
pub trait CruiseRepository {
    /// All cruises in storage order.
    fn list(&self) -> Result<Vec<Cruise>>;

    fn get_by_id(&self, id: &str) -> Result<Option<Cruise>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Replace the cruise with the same id, or append a new one.
    ///
    /// Replacing stamps `date_modified` with the current time.
    fn upsert(&mut self, cruise: Cruise) -> Result<()>;

    /// Remove a cruise. Returns whether anything was removed.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Find the first element matching `matches`, appending `make()` if none does.
///
/// Returns the element and whether it was newly inserted.
pub fn upsert_by<T, F, M>(items: &mut Vec<T>, matches: F, make: M) -> (&mut T, bool)
where
    F: Fn(&T) -> bool,
    M: FnOnce() -> T,
{
    match items.iter().position(matches) {
        Some(index) => (&mut items[index], false),
        None => {
            items.push(make());
            let last = items.len() - 1;
            (&mut items[last], true)
        }
    }
}

/// Shared upsert rule for every repository: replace by id and stamp, or append.
pub(crate) fn upsert_cruise(cruises: &mut Vec<Cruise>, cruise: Cruise, now: String) {
    let id = cruise.id.clone();
    let (slot, inserted) = upsert_by(cruises, |c| c.id == id, || cruise.clone());
    if !inserted {
        *slot = cruise;
        slot.date_modified = now;
    }
}

/// In-process cruise collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryCruiseStore {
    cruises: Vec<Cruise>,
}

impl MemoryCruiseStore {
    pub fn new(cruises: Vec<Cruise>) -> Self {
        Self { cruises }
    }
}

impl CruiseRepository for MemoryCruiseStore {
    fn list(&self) -> Result<Vec<Cruise>> {
        Ok(self.cruises.clone())
    }

    fn upsert(&mut self, cruise: Cruise) -> Result<()> {
        upsert_cruise(&mut self.cruises, cruise, chrono::Utc::now().to_rfc3339());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.cruises.len();
        self.cruises.retain(|c| c.id != id);
        Ok(self.cruises.len() != before)
    }
}
