use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Record, SyncKind};
use crate::forms::coerce_count;
use crate::store::Collections;

/// One logged sabha: who came, what was cooked and what was left over.
///
/// Attendance counts are independent: `gents + ladies` is not required to
/// equal `total_bhaktas`, since the total may include staff and children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    pub event_name: String,
    #[serde(default)]
    pub pujya_santo: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_bhaktas: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub gents: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub ladies: u32,
    /// Newline-delimited list of dishes served.
    #[serde(default)]
    pub menu: String,
    /// Newline-delimited list of ingredients used.
    #[serde(default)]
    pub ingredients: String,
    /// Number of people the kitchen cooked for.
    #[serde(default, deserialize_with = "lenient_count")]
    pub people_count: u32,
    #[serde(default)]
    pub leftover_food: String,
    #[serde(default)]
    pub remade_items: String,
    #[serde(default)]
    pub notes: String,
}

impl Event {
    /// Menu lines with surrounding whitespace removed, blank lines skipped.
    pub fn menu_items(&self) -> impl Iterator<Item = &str> {
        self.menu
            .lines()
            .map(str::trim)
            .filter(|item| !item.is_empty())
    }
}

/// Reads a stored count without rejecting the whole collection over one
/// value: negatives clamp to 0, large values saturate, fractions truncate and
/// numeric strings are read like form input. Anything else is 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => u32::try_from(u).unwrap_or(u32::MAX),
            (None, Some(_), _) => 0,
            (None, None, Some(f)) => f.clamp(0.0, u32::MAX as f64) as u32,
            _ => 0,
        },
        Value::String(raw) => coerce_count(&raw),
        _ => 0,
    };
    Ok(count)
}

impl Record for Event {
    const STORAGE_KEY: &'static str = "sabhaEvents";
    const SYNC_KIND: SyncKind = SyncKind::Sabha;
    const LABEL: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.event_name.clone(),
            self.pujya_santo.clone(),
            self.total_bhaktas.to_string(),
            self.gents.to_string(),
            self.ladies.to_string(),
            self.menu.clone(),
            self.ingredients.clone(),
            self.people_count.to_string(),
            self.leftover_food.clone(),
            self.remade_items.clone(),
            self.notes.clone(),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.events
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_snapshot() {
        let json = r#"{
            "id": "1718000000000",
            "date": "2024-06-10",
            "eventName": "Ravi Sabha",
            "pujyaSanto": "",
            "totalBhaktas": 120,
            "gents": 70,
            "ladies": 40,
            "menu": "Rice\nDal",
            "ingredients": "Rice\nToor dal",
            "peopleCount": 130,
            "leftoverFood": "",
            "remadeItems": "",
            "notes": ""
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_name, "Ravi Sabha");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        // 70 + 40 != 120 is accepted as-is.
        assert_eq!(event.total_bhaktas, 120);
        assert_eq!(event.gents + event.ladies, 110);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["peopleCount"], 130);
        assert_eq!(back["eventName"], "Ravi Sabha");
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{"id":"a","date":"2024-01-01","eventName":"Shibir"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.notes, "");
        assert_eq!(event.total_bhaktas, 0);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let json = r#"{"id":"a","date":"2024-01-01","eventName":"Shibir",
            "totalBhaktas":"85","gents":-1,"ladies":4294967296,"peopleCount":12.7}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.total_bhaktas, 85);
        assert_eq!(event.gents, 0);
        assert_eq!(event.ladies, u32::MAX);
        assert_eq!(event.people_count, 12);
    }

    #[test]
    fn menu_items_skip_blank_lines() {
        let event = Event {
            menu: "  Rice \n\nDal\n   \nSabzi".to_string(),
            ..Default::default()
        };
        let items: Vec<_> = event.menu_items().collect();
        assert_eq!(items, vec!["Rice", "Dal", "Sabzi"]);
    }
}
