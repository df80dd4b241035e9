//! Whole-store JSON export.
//!
//! The exported document is `{events, recipes, exportedAt}`. Nothing reads it
//! back in; it is a backup for people, not a restore format.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Event, Recipe};
use crate::store::{KeyValueStorage, RecordStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub events: Vec<Event>,
    pub recipes: Vec<Recipe>,
    pub exported_at: String,
}

impl ExportSnapshot {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Copies both collections out of `store`, stamped with `now`.
pub fn export_snapshot<S: KeyValueStorage>(store: &RecordStore<S>, now: DateTime<Utc>) -> ExportSnapshot {
    ExportSnapshot {
        events: store.events().to_vec(),
        recipes: store.recipes().to_vec(),
        exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("sabha-manager-export-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::RecipeCategory;
    use crate::store::MemoryStorage;

    #[test]
    fn snapshot_contains_both_collections() {
        let mut store = RecordStore::load(MemoryStorage::default());
        store
            .upsert(
                Event {
                    date: NaiveDate::from_ymd_opt(2024, 4, 21).unwrap(),
                    event_name: "Ravi Sabha".to_string(),
                    ..Default::default()
                },
                None,
            )
            .unwrap();
        store
            .upsert(
                Recipe {
                    name: "Kheer".to_string(),
                    category: RecipeCategory::Dessert,
                    ..Default::default()
                },
                None,
            )
            .unwrap();

        let now = Utc.with_ymd_and_hms(2024, 4, 22, 9, 30, 0).unwrap();
        let snapshot = export_snapshot(&store, now);
        let json: serde_json::Value =
            serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["exportedAt"], "2024-04-22T09:30:00.000Z");
        assert_eq!(json["events"][0]["eventName"], "Ravi Sabha");
        assert_eq!(json["recipes"][0]["category"], "Dessert");
    }

    #[test]
    fn file_name_uses_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(export_file_name(date), "sabha-manager-export-2024-02-09.json");
    }
}
