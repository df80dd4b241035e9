//! Runtime state of the `SabhaManager` component.
//!
//! The Record Store is the only owner of events and recipes; everything else
//! here is transient UI state (active tab, form staging, the toast slot, the
//! recipe generator sheet).

use common::forms::{EventDraft, FormController, RecipeDraft};
use common::model::SyncKind;
use common::store::RecordStore;
use yew::NodeRef;

use super::helpers::today;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Dashboard,
    AddEvent,
    Events,
    Recipes,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::AddEvent, Tab::Events, Tab::Recipes];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::AddEvent => "Add Event",
            Tab::Events => "Events",
            Tab::Recipes => "Recipes",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "home",
            Tab::AddEvent => "add",
            Tab::Events => "calendar_today",
            Tab::Recipes => "menu_book",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Sequence number; a dismiss timer only clears the toast it was started for.
    pub seq: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeneratorField {
    ItemName,
    Servings,
    Preferences,
}

/// Inputs and output of the "Generate with AI" sheet.
#[derive(Default)]
pub struct GeneratorState {
    pub item_name: String,
    pub servings: String,
    pub preferences: String,
    pub loading: bool,
    /// Generated text, shown verbatim.
    pub result: Option<String>,
    pub sheet_ref: NodeRef,
}

pub struct SabhaManager {
    pub store: RecordStore<BrowserStorage>,
    pub active_tab: Tab,
    /// Shared by the events and recipes lists, as in a single search box.
    pub search_term: String,
    pub event_form: FormController<EventDraft>,
    pub recipe_form: FormController<RecipeDraft>,
    pub toast: Option<Toast>,
    pub next_toast_seq: u32,
    pub generator: GeneratorState,
    /// Collections with a sync request in flight; their buttons are disabled.
    pub syncing: Vec<SyncKind>,
}

impl SabhaManager {
    pub fn new() -> Self {
        let today = today();
        let mut event_form = FormController::new(today);
        // The add-event tab always shows a form.
        event_form.start_create();

        Self {
            store: RecordStore::load(BrowserStorage::open()),
            active_tab: Tab::Dashboard,
            search_term: String::new(),
            event_form,
            recipe_form: FormController::new(today),
            toast: None,
            next_toast_seq: 0,
            generator: GeneratorState {
                servings: "50".to_string(),
                ..Default::default()
            },
            syncing: Vec::new(),
        }
    }
}
