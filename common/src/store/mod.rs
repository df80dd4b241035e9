//! The Record Store: sole owner of the event and recipe collections.
//!
//! Collections are loaded once from a [`KeyValueStorage`] and every mutation
//! rewrites the whole affected collection before returning, so the storage
//! medium always mirrors what the UI shows.

mod storage;

use log::{debug, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Event, Recipe, Record};

pub use storage::{KeyValueStorage, MemoryStorage};

/// Storage key of the dark-mode display preference (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// Both collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub events: Vec<Event>,
    pub recipes: Vec<Recipe>,
}

/// In-memory collections plus the storage they are persisted to.
pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    collections: Collections,
    dark_mode: bool,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Reads both collections and the display preference from `storage`.
    ///
    /// Missing keys give empty collections and a light theme. A snapshot that
    /// fails to parse is logged and replaced by an empty collection.
    pub fn load(storage: S) -> Self {
        let collections = Collections {
            events: read_collection(&storage),
            recipes: read_collection(&storage),
        };
        let dark_mode = storage
            .get(DARK_MODE_KEY)
            .map(|value| value == "true")
            .unwrap_or(false);

        debug!(
            "Loaded {} events and {} recipes",
            collections.events.len(),
            collections.recipes.len()
        );

        Self {
            storage,
            collections,
            dark_mode,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.collections.events
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.collections.recipes
    }

    pub fn records<R: Record>(&self) -> &[R] {
        R::collection(&self.collections)
    }

    pub fn find<R: Record>(&self, id: &str) -> Option<&R> {
        self.records::<R>().iter().find(|record| record.id() == id)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Creates or updates a record and persists its collection.
    ///
    /// With an `editing_id` that matches an existing record, that record is
    /// replaced in place and keeps its identifier. Otherwise the record gets a
    /// fresh identifier and is appended. Returns the identifier written.
    pub fn upsert<R: Record>(
        &mut self,
        mut record: R,
        editing_id: Option<&str>,
    ) -> Result<String, StoreError> {
        let records = R::collection_mut(&mut self.collections);

        let existing = editing_id
            .and_then(|id| records.iter().position(|candidate| candidate.id() == id));

        let id = match existing {
            Some(index) => {
                let id = records[index].id().to_string();
                record.set_id(id.clone());
                records[index] = record;
                id
            }
            None => {
                let id = Uuid::new_v4().to_string();
                record.set_id(id.clone());
                records.push(record);
                id
            }
        };

        self.persist::<R>()?;
        Ok(id)
    }

    /// Deletes the record with `id`. Returns `false` when nothing matched;
    /// an unknown id is not an error.
    pub fn remove<R: Record>(&mut self, id: &str) -> Result<bool, StoreError> {
        let records = R::collection_mut(&mut self.collections);
        let before = records.len();
        records.retain(|record| record.id() != id);

        if records.len() == before {
            return Ok(false);
        }

        self.persist::<R>()?;
        Ok(true)
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), StoreError> {
        self.dark_mode = dark_mode;
        self.storage.set(DARK_MODE_KEY, &dark_mode.to_string())
    }

    fn persist<R: Record>(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(R::collection(&self.collections))?;
        self.storage.set(R::STORAGE_KEY, &json)
    }
}

fn read_collection<R: Record>(storage: &impl KeyValueStorage) -> Vec<R> {
    let Some(raw) = storage.get(R::STORAGE_KEY) else {
        return Vec::new();
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(
            "Stored {} data under `{}` is unreadable, starting empty: {}",
            R::LABEL,
            R::STORAGE_KEY,
            e
        );
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::RecipeCategory;

    fn event(name: &str) -> Event {
        Event {
            date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            event_name: name.to_string(),
            total_bhaktas: 50,
            menu: "Rice\nDal".to_string(),
            ..Default::default()
        }
    }

    fn recipe(name: &str, category: RecipeCategory) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: "Milk\nSugar".to_string(),
            process: "Boil".to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn load_from_empty_storage() {
        let store = RecordStore::load(MemoryStorage::default());
        assert!(store.events().is_empty());
        assert!(store.recipes().is_empty());
        assert!(!store.dark_mode());
    }

    #[test]
    fn malformed_snapshot_loads_as_empty() {
        let mut storage = MemoryStorage::default();
        storage.set(Event::STORAGE_KEY, "{not json").unwrap();
        storage
            .set(Recipe::STORAGE_KEY, r#"[{"id":"r1","name":"Kheer","ingredients":"Milk","process":"Boil","category":"Dessert"}]"#)
            .unwrap();
        storage.set(DARK_MODE_KEY, "true").unwrap();

        let store = RecordStore::load(storage);
        assert!(store.events().is_empty());
        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.recipes()[0].category, RecipeCategory::Dessert);
        assert!(store.dark_mode());
    }

    #[test]
    fn negative_stored_count_keeps_collection() {
        let mut storage = MemoryStorage::default();
        storage
            .set(
                Event::STORAGE_KEY,
                r#"[{"id":"1","date":"2024-05-05","eventName":"Ravi Sabha","gents":12},
                    {"id":"2","date":"2024-05-12","eventName":"Bal Sabha","gents":-1}]"#,
            )
            .unwrap();

        let mut store = RecordStore::load(storage);
        assert_eq!(store.events().len(), 2);
        assert_eq!(store.events()[1].gents, 0);

        store.upsert(event("Yuva Sabha"), None).unwrap();
        let raw = store.storage().get(Event::STORAGE_KEY).unwrap();
        let persisted: Vec<Event> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.len(), 3);
    }

    #[test]
    fn create_assigns_distinct_ids_and_persists() {
        let mut store = RecordStore::load(MemoryStorage::default());

        let ids: Vec<String> = (0..25)
            .map(|n| store.upsert(event(&format!("Sabha {n}")), None).unwrap())
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(store.events().len(), 25);

        let raw = store.storage().get(Event::STORAGE_KEY).unwrap();
        let persisted: Vec<Event> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.events());
    }

    #[test]
    fn update_keeps_identity_and_length() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let first = store.upsert(event("Ravi Sabha"), None).unwrap();
        store.upsert(event("Yuva Sabha"), None).unwrap();

        let mut changed = event("Ravi Sabha (updated)");
        changed.id = "ignored".to_string();
        let written = store.upsert(changed, Some(&first)).unwrap();

        assert_eq!(written, first);
        assert_eq!(store.events().len(), 2);
        assert_eq!(store.events()[0].id, first);
        assert_eq!(store.events()[0].event_name, "Ravi Sabha (updated)");
    }

    #[test]
    fn unknown_editing_id_creates() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let id = store
            .upsert(recipe("Kheer", RecipeCategory::Dessert), Some("missing"))
            .unwrap();
        assert_ne!(id, "missing");
        assert_eq!(store.recipes().len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let keep = store.upsert(recipe("Poha", RecipeCategory::Snack), None).unwrap();
        let gone = store.upsert(recipe("Lassi", RecipeCategory::Drink), None).unwrap();

        assert!(store.remove::<Recipe>(&gone).unwrap());
        let after_first = store.recipes().to_vec();
        assert!(!store.remove::<Recipe>(&gone).unwrap());

        assert_eq!(store.recipes(), after_first.as_slice());
        assert_eq!(store.recipes()[0].id, keep);
    }

    #[test]
    fn reload_round_trips_collections() {
        let mut store = RecordStore::load(MemoryStorage::default());
        store.upsert(event("Ravi Sabha"), None).unwrap();
        store.upsert(event("Bal Sabha"), None).unwrap();
        store.upsert(recipe("Kheer", RecipeCategory::Dessert), None).unwrap();
        store.set_dark_mode(true).unwrap();

        let events = store.events().to_vec();
        let recipes = store.recipes().to_vec();

        let reloaded = RecordStore::load(store.storage().clone());
        assert_eq!(reloaded.events(), events.as_slice());
        assert_eq!(reloaded.recipes(), recipes.as_slice());
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = RecordStore::load(MemoryStorage::read_only());
        let result = store.upsert(event("Ravi Sabha"), None);
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }
}
