//! Calls from the browser to the backend's JSON endpoints.
//!
//! Both helpers flatten every failure (network, non-2xx, bad JSON) into a
//! `String` for the toast; nothing is retried.

use common::model::Record;
use common::requests::{
    ErrorResponse, GenerateRecipeRequest, GenerateRecipeResponse, SyncRequest, SyncResponse,
};
use gloo_net::http::{Request, Response};

pub async fn generate_recipe(request: GenerateRecipeRequest) -> Result<String, String> {
    let response = Request::post("/api/generate-recipe")
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        response
            .json::<GenerateRecipeResponse>()
            .await
            .map(|body| body.recipe)
            .map_err(|e| e.to_string())
    } else {
        Err(error_text(&response).await)
    }
}

/// Pushes a whole collection to the spreadsheet through the backend and
/// returns the webhook's response text.
pub async fn sync_records(request: SyncRequest) -> Result<String, String> {
    let response = Request::post("/api/sync")
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        response
            .json::<SyncResponse>()
            .await
            .map(|body| body.result)
            .map_err(|e| e.to_string())
    } else {
        Err(error_text(&response).await)
    }
}

pub fn sync_request_for<R: Record>(records: &[R]) -> Result<SyncRequest, String> {
    SyncRequest::for_records(records).map_err(|e| e.to_string())
}

async fn error_text(response: &Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {} {}", response.status(), response.status_text()),
    }
}
