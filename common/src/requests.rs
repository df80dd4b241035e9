//! Request and response bodies exchanged between the frontend and backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Record, SyncKind};

/// Body of `POST /api/generate-recipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    pub item_name: String,
    pub servings: u32,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Successful reply of `POST /api/generate-recipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRecipeResponse {
    pub recipe: String,
}

/// Error body returned by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /api/sync`, forwarded as-is to the spreadsheet webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRequest {
    #[serde(rename = "type")]
    pub kind: SyncKind,
    pub data: Vec<Value>,
}

impl SyncRequest {
    /// Builds the sync body for a whole collection.
    pub fn for_records<R: Record>(records: &[R]) -> Result<Self, serde_json::Error> {
        let data = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind: R::SYNC_KIND,
            data,
        })
    }

    /// Message shown when there is nothing to push.
    pub fn empty_message(kind: SyncKind) -> String {
        format!("No {} data found to sync.", kind.label())
    }
}

/// Successful reply of `POST /api/sync`: the webhook's raw response text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recipe, RecipeCategory};

    #[test]
    fn generate_request_uses_camel_case() {
        let body: GenerateRecipeRequest =
            serde_json::from_str(r#"{"itemName":"Khichdi","servings":40}"#).unwrap();
        assert_eq!(body.item_name, "Khichdi");
        assert_eq!(body.preferences, None);
    }

    #[test]
    fn sync_body_is_tagged_by_kind() {
        let recipes = vec![Recipe {
            id: "r1".to_string(),
            name: "Kheer".to_string(),
            category: RecipeCategory::Dessert,
            ..Default::default()
        }];
        let body = SyncRequest::for_records(&recipes).unwrap();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["type"], "recipe");
        assert_eq!(json["data"][0]["name"], "Kheer");
        assert_eq!(
            SyncRequest::empty_message(SyncKind::Sabha),
            "No Sabha data found to sync."
        );
    }
}
