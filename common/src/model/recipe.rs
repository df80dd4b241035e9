use serde::{Deserialize, Serialize};

use super::{Record, RecipeCategory, SyncKind};
use crate::store::Collections;

/// A dish in the recipe book.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Newline-delimited ingredient list.
    pub ingredients: String,
    /// Preparation steps.
    pub process: String,
    #[serde(default)]
    pub category: RecipeCategory,
}

impl Record for Recipe {
    const STORAGE_KEY: &'static str = "sabhaRecipes";
    const SYNC_KIND: SyncKind = SyncKind::Recipe;
    const LABEL: &'static str = "Recipe";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.ingredients.clone(),
            self.process.clone(),
            self.category.to_string(),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.recipes
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.recipes
    }
}
