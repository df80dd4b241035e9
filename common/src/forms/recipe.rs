use chrono::NaiveDate;

use super::input::coerce_category;
use super::Draft;
use crate::model::{Recipe, RecipeCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    Name,
    Ingredients,
    Process,
    Category,
}

impl RecipeField {
    pub fn is_required(self) -> bool {
        !matches!(self, RecipeField::Category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub process: String,
    pub category: String,
}

impl Draft for RecipeDraft {
    type Record = Recipe;
    type Field = RecipeField;

    const REOPEN_AFTER_SUBMIT: bool = false;

    fn blank(_today: NaiveDate) -> Self {
        Self {
            category: RecipeCategory::default().to_string(),
            ..Default::default()
        }
    }

    fn from_record(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            process: recipe.process.clone(),
            category: recipe.category.to_string(),
        }
    }

    fn set(&mut self, field: RecipeField, value: String) {
        match field {
            RecipeField::Name => self.name = value,
            RecipeField::Ingredients => self.ingredients = value,
            RecipeField::Process => self.process = value,
            RecipeField::Category => self.category = value,
        }
    }

    fn to_record(&self, _today: NaiveDate) -> Recipe {
        Recipe {
            id: String::new(),
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            process: self.process.clone(),
            category: coerce_category(&self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_fields_are_required() {
        assert!(RecipeField::Name.is_required());
        assert!(RecipeField::Ingredients.is_required());
        assert!(RecipeField::Process.is_required());
        assert!(!RecipeField::Category.is_required());
    }
}
