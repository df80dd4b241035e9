//! Record types kept by the [`crate::store::RecordStore`].
//!
//! Both collections are plain lists of flat records: no record refers to
//! another, and identity is an opaque string assigned by the store.

pub mod category;
pub mod event;
pub mod recipe;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::Collections;

pub use category::RecipeCategory;
pub use event::Event;
pub use recipe::Recipe;

/// Tag sent alongside a collection when it is pushed to the spreadsheet
/// webhook, so the receiving script knows which sheet to append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncKind {
    Sabha,
    Recipe,
}

impl SyncKind {
    /// Human label used in user-facing messages ("No Sabha data found to sync.").
    pub fn label(self) -> &'static str {
        match self {
            SyncKind::Sabha => "Sabha",
            SyncKind::Recipe => "Recipe",
        }
    }
}

/// A record that lives in one of the store's collections.
///
/// Implementors describe where they are persisted and how they are searched;
/// the store and the view functions are written once against this trait.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Storage key holding the JSON array of this record type.
    const STORAGE_KEY: &'static str;

    /// Spreadsheet tag for this record type.
    const SYNC_KIND: SyncKind;

    /// Singular display name ("Event", "Recipe").
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// String form of every user-facing field, in declaration order.
    ///
    /// The opaque identifier is left out.
    fn field_values(&self) -> Vec<String>;

    fn collection(collections: &Collections) -> &Vec<Self>;

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self>;
}
