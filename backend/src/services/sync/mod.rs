//! # Spreadsheet Sync Service
//!
//! Forwards a whole collection from the browser to the Google Sheets Apps
//! Script web app configured in `SHEETS_WEBAPP_URL`. The browser cannot call
//! the script directly without exposing the URL and fighting CORS, so the
//! backend relays the `{type, data}` body unchanged.
//!
//! There is no retry: a failure is reported once and the user may press the
//! sync button again.

mod push;

use actix_web::web::{post, resource};
use actix_web::Resource;

const API_PATH: &str = "/api/sync";

/// Configures the sync endpoint.
///
/// *   **`POST /api/sync`**:
///     - **Handler**: `push::process`
///     - **Description**: Accepts `{type: "sabha"|"recipe", data: [...]}`. Answers
///       `{result}` with the webhook's response text, `400 {error}` when `data`
///       is empty, or `502 {error}` when the webhook is unset or unreachable.
pub fn configure_routes() -> Resource {
    resource(API_PATH).route(post().to(push::process))
}
