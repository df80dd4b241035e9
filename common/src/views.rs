//! Derived views over the store's collections.
//!
//! Every function here is pure and cheap at the data sizes involved (tens to
//! a few hundred records), so the UI recomputes them on each render instead of
//! caching anything.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Event, Recipe, RecipeCategory, Record};

/// Number of most recent events plotted in the attendance chart.
pub const ATTENDANCE_WINDOW: usize = 10;

/// Number of most recent events plotted in the gender ratio chart.
pub const GENDER_RATIO_WINDOW: usize = 5;

/// Rendered in place of the latest date when no events exist.
pub const NO_EVENTS_YET: &str = "No events yet";

/// Rendered in place of the most frequent menu item when no menu lines exist.
pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePoint {
    pub name: String,
    pub date: NaiveDate,
    pub total_bhaktas: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderRatioPoint {
    pub name: String,
    pub gents: u32,
    pub ladies: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: RecipeCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemFrequency {
    pub item: String,
    pub count: usize,
}

/// Figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_events: usize,
    pub total_bhaktas: u64,
    pub total_recipes: usize,
    pub latest_event_date: Option<NaiveDate>,
    /// Name of the most recently added event (store order, not date order).
    pub last_added_event: Option<String>,
    pub most_frequent_menu_item: Option<MenuItemFrequency>,
}

/// Records where any field contains `term`, ignoring case.
///
/// The id is not searched: uuid hex digits would match almost any short
/// term. An empty term keeps everything. Store order is preserved.
pub fn filter_by_search<'a, R: Record>(records: &'a [R], term: &str) -> Vec<&'a R> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            record
                .field_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn attendance_trend(events: &[Event]) -> Vec<AttendancePoint> {
    last_n(events, ATTENDANCE_WINDOW)
        .iter()
        .map(|event| AttendancePoint {
            name: event.event_name.clone(),
            date: event.date,
            total_bhaktas: event.total_bhaktas,
        })
        .collect()
}

pub fn gender_ratio_trend(events: &[Event]) -> Vec<GenderRatioPoint> {
    last_n(events, GENDER_RATIO_WINDOW)
        .iter()
        .map(|event| GenderRatioPoint {
            name: event.event_name.clone(),
            gents: event.gents,
            ladies: event.ladies,
        })
        .collect()
}

/// Recipe count per category, in the order categories are first seen.
pub fn recipe_category_distribution(recipes: &[Recipe]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for recipe in recipes {
        match counts.iter_mut().find(|c| c.category == recipe.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: recipe.category,
                count: 1,
            }),
        }
    }

    counts
}

/// Latest event by calendar date, regardless of when it was entered.
pub fn latest_event_date(events: &[Event]) -> Option<NaiveDate> {
    events.iter().map(|event| event.date).max()
}

/// The menu line served most often across all events.
///
/// Ties go to the item counted first.
pub fn most_frequent_menu_item(events: &[Event]) -> Option<MenuItemFrequency> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in events.iter().flat_map(Event::menu_items) {
        match index.get(item) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(item, order.len());
                order.push((item, 1));
            }
        }
    }

    // `max_by_key` keeps the last maximum, so walk the counts back to front.
    order
        .into_iter()
        .rev()
        .max_by_key(|&(_, count)| count)
        .map(|(item, count)| MenuItemFrequency {
            item: item.to_string(),
            count,
        })
}

pub fn dashboard_summary(events: &[Event], recipes: &[Recipe]) -> DashboardSummary {
    DashboardSummary {
        total_events: events.len(),
        total_bhaktas: events.iter().map(|e| u64::from(e.total_bhaktas)).sum(),
        total_recipes: recipes.len(),
        latest_event_date: latest_event_date(events),
        last_added_event: events.last().map(|e| e.event_name.clone()),
        most_frequent_menu_item: most_frequent_menu_item(events),
    }
}

fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}
