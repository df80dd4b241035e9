use actix_web::{web, HttpResponse, Responder};
use common::requests::{ErrorResponse, GenerateRecipeRequest, GenerateRecipeResponse};
use log::{error, info};

use super::completion::complete;
use crate::state::AppState;

/// Error text shown to the user for every generation failure.
pub const GENERATION_FAILED: &str = "Failed to generate recipe";

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<GenerateRecipeRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    info!(
        "Generating recipe for \"{}\" ({} servings)",
        request.item_name, request.servings
    );

    match complete(&state, &build_prompt(&request)).await {
        Ok(recipe) => HttpResponse::Ok().json(GenerateRecipeResponse { recipe }),
        Err(e) => {
            error!("Error generating recipe: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: GENERATION_FAILED.to_string(),
            })
        }
    }
}

/// Builds the single user message sent to the model.
pub fn build_prompt(request: &GenerateRecipeRequest) -> String {
    let preferences = request
        .preferences
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or("none");

    format!(
        "Generate a detailed cooking recipe for {} people using \"{}\". \
         Include ingredients and step-by-step instructions. Dietary preferences: {}.",
        request.servings, request.item_name, preferences
    )
}
