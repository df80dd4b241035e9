use crate::config::Config;

/// Shared by every worker through `web::Data`.
///
/// Holds one `reqwest::Client` so outbound calls reuse its connection pool.
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
