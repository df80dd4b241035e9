//! Form/Edit controller shared by the event and recipe forms.
//!
//! A [`FormController`] stages raw form text in a [`Draft`] and tracks whether
//! the form is closed, creating a new record, or editing an existing one.
//! Submitting converts the draft into a typed record and performs exactly one
//! [`RecordStore::upsert`]; cancelling never touches the store.

mod event;
mod input;
mod recipe;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::Record;
use crate::store::{KeyValueStorage, RecordStore};

pub use event::{EventDraft, EventField};
pub use input::{coerce_category, coerce_count, coerce_date};
pub use recipe::{RecipeDraft, RecipeField};

/// Where a form currently is in its create/edit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Form hidden, nothing staged.
    Idle,
    /// Form shown with blank/default fields.
    Creating,
    /// Form shown pre-populated from the record with this id.
    Editing(String),
}

/// Raw, unvalidated form input for one record type.
pub trait Draft: Clone + PartialEq {
    type Record: Record;
    type Field: Copy;

    /// Whether the form stays open (in [`FormMode::Creating`]) after a
    /// successful submit, or closes back to [`FormMode::Idle`].
    const REOPEN_AFTER_SUBMIT: bool;

    fn blank(today: NaiveDate) -> Self;

    fn from_record(record: &Self::Record) -> Self;

    fn set(&mut self, field: Self::Field, value: String);

    /// Converts the raw text into a record, coercing anything that does not
    /// parse to its default. The returned record has an empty id.
    fn to_record(&self, today: NaiveDate) -> Self::Record;
}

/// Result of a submit, carrying the id that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Updated(String),
}

impl SubmitOutcome {
    pub fn id(&self) -> &str {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => id.as_str(),
        }
    }

    /// Notification text, e.g. "Event added successfully!".
    pub fn message(&self, label: &str) -> String {
        match self {
            SubmitOutcome::Created(_) => format!("{label} added successfully!"),
            SubmitOutcome::Updated(_) => format!("{label} updated successfully!"),
        }
    }
}

pub struct FormController<D: Draft> {
    mode: FormMode,
    draft: D,
    today: NaiveDate,
}

impl<D: Draft> FormController<D> {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Idle,
            draft: D::blank(today),
            today,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Editing(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Updates the date used for blank drafts and unparsable date input.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn start_create(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = D::blank(self.today);
    }

    /// `start_create` with a fresh clock reading, so a form opened after
    /// midnight defaults to the new date.
    pub fn start_create_on(&mut self, today: NaiveDate) {
        self.set_today(today);
        self.start_create();
    }

    /// Loads the record with `id` into the form. Returns `false` and leaves
    /// the form untouched when no such record exists.
    pub fn start_edit<S: KeyValueStorage>(&mut self, store: &RecordStore<S>, id: &str) -> bool {
        match store.find::<D::Record>(id) {
            Some(record) => {
                self.draft = D::from_record(record);
                self.mode = FormMode::Editing(id.to_string());
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, field: D::Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
        self.draft = D::blank(self.today);
    }

    /// Writes the staged draft to `store` and resets the form.
    ///
    /// The form is reset even when persistence fails, because the store has
    /// already applied the change in memory.
    pub fn submit<S: KeyValueStorage>(
        &mut self,
        store: &mut RecordStore<S>,
    ) -> Result<SubmitOutcome, StoreError> {
        let record = self.draft.to_record(self.today);
        let editing = self
            .editing_id()
            .filter(|id| store.find::<D::Record>(id).is_some())
            .map(str::to_string);

        let written = store.upsert(record, editing.as_deref());

        self.draft = D::blank(self.today);
        self.mode = if D::REOPEN_AFTER_SUBMIT {
            FormMode::Creating
        } else {
            FormMode::Idle
        };

        let id = written?;
        Ok(match editing {
            Some(_) => SubmitOutcome::Updated(id),
            None => SubmitOutcome::Created(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, RecipeCategory};
    use crate::store::MemoryStorage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
    }

    #[test]
    fn starts_idle_with_blank_draft() {
        let form = FormController::<EventDraft>::new(today());
        assert_eq!(form.mode(), &FormMode::Idle);
        assert_eq!(form.draft().date, "2024-08-15");
        assert_eq!(form.draft().gents, "0");
    }

    #[test]
    fn start_create_on_uses_the_new_date() {
        let mut form = FormController::<EventDraft>::new(today());
        form.start_create();
        assert_eq!(form.draft().date, "2024-08-15");

        form.cancel();
        form.start_create_on(today().succ_opt().unwrap());
        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.draft().date, "2024-08-16");
    }

    #[test]
    fn create_submit_appends_and_stays_open() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let mut form = FormController::<EventDraft>::new(today());

        form.start_create();
        form.set(EventField::EventName, "Ravi Sabha".to_string());
        form.set(EventField::TotalBhaktas, "120".to_string());
        form.set(EventField::Gents, "abc".to_string());
        form.set(EventField::Ladies, "".to_string());

        let outcome = form.submit(&mut store).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_eq!(outcome.message(Event::LABEL), "Event added successfully!");

        let saved = &store.events()[0];
        assert_eq!(saved.id, outcome.id());
        assert_eq!(saved.total_bhaktas, 120);
        assert_eq!(saved.gents, 0);
        assert_eq!(saved.ladies, 0);

        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.draft().event_name, "");
    }

    #[test]
    fn edit_submit_updates_in_place() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let mut form = FormController::<RecipeDraft>::new(today());

        form.start_create();
        form.set(RecipeField::Name, "Kheer".to_string());
        form.set(RecipeField::Category, "Dessert".to_string());
        let id = form.submit(&mut store).unwrap().id().to_string();
        assert_eq!(form.mode(), &FormMode::Idle);

        assert!(form.start_edit(&store, &id));
        assert_eq!(form.editing_id(), Some(id.as_str()));
        assert_eq!(form.draft().name, "Kheer");

        form.set(RecipeField::Name, "Rice Kheer".to_string());
        let outcome = form.submit(&mut store).unwrap();

        assert_eq!(outcome, SubmitOutcome::Updated(id.clone()));
        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.recipes()[0].id, id);
        assert_eq!(store.recipes()[0].name, "Rice Kheer");
        assert_eq!(store.recipes()[0].category, RecipeCategory::Dessert);
    }

    #[test]
    fn edit_of_unknown_id_is_refused() {
        let store = RecordStore::load(MemoryStorage::default());
        let mut form = FormController::<RecipeDraft>::new(today());
        assert!(!form.start_edit(&store, "nope"));
        assert_eq!(form.mode(), &FormMode::Idle);
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let mut form = FormController::<EventDraft>::new(today());
        form.start_create();
        form.set(EventField::EventName, "Draft only".to_string());
        form.submit(&mut store).unwrap();

        let id = store.events()[0].id.clone();
        form.start_edit(&store, &id);
        form.set(EventField::EventName, "Never saved".to_string());
        form.cancel();

        assert_eq!(form.mode(), &FormMode::Idle);
        assert_eq!(store.events()[0].event_name, "Draft only");
        assert!(store.recipes().is_empty());
    }

    #[test]
    fn edit_of_record_deleted_meanwhile_creates() {
        let mut store = RecordStore::load(MemoryStorage::default());
        let mut form = FormController::<EventDraft>::new(today());
        form.start_create();
        form.set(EventField::EventName, "Ravi Sabha".to_string());
        let id = form.submit(&mut store).unwrap().id().to_string();

        form.start_edit(&store, &id);
        store.remove::<Event>(&id).unwrap();

        let outcome = form.submit(&mut store).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_eq!(store.events().len(), 1);
    }
}
