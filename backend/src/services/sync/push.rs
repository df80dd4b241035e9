use actix_web::{web, HttpResponse};
use common::requests::{SyncRequest, SyncResponse};
use log::{error, info};

use crate::error::AppError;
use crate::state::AppState;

pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<SyncRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let label = request.kind.label();

    if request.data.is_empty() {
        return Err(AppError::BadRequest(SyncRequest::empty_message(request.kind)));
    }

    match push(&state, &request).await {
        Ok(result) => {
            info!("{label} Sync Result: {result}");
            Ok(HttpResponse::Ok().json(SyncResponse { result }))
        }
        Err(e) => {
            error!("{label} Sync Error: {e}");
            Err(e)
        }
    }
}

/// Posts the body to the webhook and returns its response text.
async fn push(state: &AppState, request: &SyncRequest) -> Result<String, AppError> {
    let url = state
        .config
        .sheets_webapp_url
        .as_deref()
        .ok_or(AppError::NotConfigured("SHEETS_WEBAPP_URL"))?;

    info!(
        "Pushing {} {} records to the spreadsheet",
        request.data.len(),
        request.kind.label()
    );

    let response = state.http.post(url).json(request).send().await?;
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App, HttpServer};
    use common::requests::ErrorResponse;
    use serde_json::{json, Value};

    use super::*;
    use crate::config::Config;

    fn state(sheets_webapp_url: Option<String>) -> web::Data<AppState> {
        web::Data::new(AppState::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            openai_api_key: None,
            openai_model: "gpt-4".to_string(),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            sheets_webapp_url,
            open_browser: false,
        }))
    }

    #[actix_web::test]
    async fn empty_collection_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state(Some("http://127.0.0.1:9".to_string())))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sync")
            .set_json(json!({"type": "sabha", "data": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No Sabha data found to sync.");
    }

    #[actix_web::test]
    async fn unconfigured_webhook_is_a_gateway_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(None))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sync")
            .set_json(json!({"type": "recipe", "data": [{"name": "Kheer"}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 502);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "SHEETS_WEBAPP_URL is not configured");
    }

    async fn fake_webhook(body: web::Json<Value>) -> HttpResponse {
        let rows = body["data"].as_array().map(Vec::len).unwrap_or_default();
        HttpResponse::Ok().body(format!("appended {rows} {} rows", body["type"].as_str().unwrap_or("?")))
    }

    #[actix_web::test]
    async fn forwards_body_and_returns_webhook_text() {
        let webhook = HttpServer::new(|| App::new().route("/exec", web::post().to(fake_webhook)))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = webhook.addrs()[0];
        actix_web::rt::spawn(webhook.run());

        let app = test::init_service(
            App::new()
                .app_data(state(Some(format!("http://{addr}/exec"))))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/sync")
            .set_json(json!({"type": "sabha", "data": [{"eventName": "A"}, {"eventName": "B"}]}))
            .to_request();
        let body: SyncResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.result, "appended 2 sabha rows");
    }
}
