mod config;
mod error;
mod services;
mod state;

use crate::config::Config;
use crate::state::AppState;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded trunk bundle. Unknown paths fall back to `index.html`
/// so client-side tabs survive a reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_result = dotenv::dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    if let Err(e) = dotenv_result {
        info!("No .env file loaded ({e}), reading the process environment only");
    }

    let config = Config::load();
    let url = config.url();
    let bind = (config.host.clone(), config.port);

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {url}: {e}");
            }
        });
    }

    let state = web::Data::new(AppState::new(config));

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(services::recipes::configure_routes())
            .service(services::sync::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
