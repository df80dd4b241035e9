//! # Recipe Generation Service
//!
//! Proxies recipe-generation prompts from the UI to an OpenAI-compatible
//! chat-completion API, so the API key never reaches the browser.
//!
//! ## Sub-modules:
//! - `generate`: the HTTP handler and the prompt it builds.
//! - `completion`: the outbound chat-completion call and its wire types.

mod completion;
mod generate;

use actix_web::web::{post, resource};
use actix_web::Resource;

const API_PATH: &str = "/api/generate-recipe";

/// Configures the generation endpoint.
///
/// # Registered Routes:
///
/// *   **`POST /api/generate-recipe`**:
///     - **Handler**: `generate::process`
///     - **Description**: Accepts `{itemName, servings, preferences}` and answers
///       `{recipe}` with the generated text, or `500 {error}` when the upstream
///       call fails for any reason.
pub fn configure_routes() -> Resource {
    resource(API_PATH).route(post().to(generate::process))
}
