use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of recipe categories offered by the recipe form.
///
/// Serialized as the display string so stored data stays readable
/// (`"Main Course"`, `"Side Dish"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecipeCategory {
    #[default]
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Side Dish")]
    SideDish,
    Dessert,
    Snack,
    Drink,
}

impl RecipeCategory {
    /// All categories in the order the form lists them.
    pub const ALL: [RecipeCategory; 5] = [
        RecipeCategory::MainCourse,
        RecipeCategory::SideDish,
        RecipeCategory::Dessert,
        RecipeCategory::Snack,
        RecipeCategory::Drink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecipeCategory::MainCourse => "Main Course",
            RecipeCategory::SideDish => "Side Dish",
            RecipeCategory::Dessert => "Dessert",
            RecipeCategory::Snack => "Snack",
            RecipeCategory::Drink => "Drink",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown recipe category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for RecipeCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RecipeCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&RecipeCategory::SideDish).unwrap();
        assert_eq!(json, "\"Side Dish\"");

        let parsed: RecipeCategory = serde_json::from_str("\"Main Course\"").unwrap();
        assert_eq!(parsed, RecipeCategory::MainCourse);
    }

    #[test]
    fn parses_form_values() {
        assert_eq!("Dessert".parse(), Ok(RecipeCategory::Dessert));
        assert_eq!(" snack ".parse(), Ok(RecipeCategory::Snack));
        let err = "Soup".parse::<RecipeCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown recipe category `Soup`");
    }
}
