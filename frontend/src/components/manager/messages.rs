use common::forms::{EventField, RecipeField};
use common::model::SyncKind;

use super::state::{GeneratorField, Tab, ToastKind};

#[derive(Clone)]
pub enum Msg {
    SetTab(Tab),
    ToggleDarkMode,
    SetSearch(String),

    SetEventField(EventField, String),
    SubmitEvent,
    CancelEvent,
    EditEvent(String),
    DeleteEvent(String),

    ShowRecipeForm,
    SetRecipeField(RecipeField, String),
    SubmitRecipe,
    CancelRecipe,
    EditRecipe(String),
    DeleteRecipe(String),

    OpenGenerator,
    CloseGenerator,
    SetGeneratorField(GeneratorField, String),
    Generate,
    GenerationFinished(Result<String, String>),
    UseGeneratedRecipe,

    Export,
    Sync(SyncKind),
    SyncFinished(SyncKind, Result<String, String>),

    ShowToast(String, ToastKind),
    /// Carries the sequence number of the toast that scheduled it.
    DismissToast(u32),
}
