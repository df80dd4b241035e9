//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file first (if one exists), so every key below can
//! live either in the real environment or in `.env` next to the binary.
//! Nothing here is fatal: a missing or unparsable value logs a warning and
//! the default is used instead.

use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Key for the chat-completion API. Without it recipe generation
    /// answers with an error instead of calling out.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// Base URL of an OpenAI-compatible API, without the trailing
    /// `/chat/completions`.
    pub openai_base_url: String,
    /// Apps Script web app receiving `{type, data}` sync posts.
    pub sheets_webapp_url: Option<String>,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "127.0.0.1".to_string()),
            port: try_load("PORT", 3000),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_model: try_load("OPENAI_MODEL", DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: try_load("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            sheets_webapp_url: optional("SHEETS_WEBAPP_URL"),
            open_browser: try_load("OPEN_BROWSER", true),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value `{raw}`: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            warn!("{key} not set, the feature depending on it is disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "HOST",
        "PORT",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "OPENAI_BASE_URL",
        "SHEETS_WEBAPP_URL",
        "OPEN_BROWSER",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_env();
        let config = Config::load();

        assert_eq!(config.url(), "http://127.0.0.1:3000");
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert!(config.openai_api_key.is_none());
        assert!(config.sheets_webapp_url.is_none());
        assert!(config.open_browser);
    }

    #[test]
    #[serial]
    fn reads_overrides_and_ignores_bad_values() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("OPENAI_API_KEY", "  sk-test  ");
        env::set_var("OPENAI_BASE_URL", "http://localhost:9999/v1/");
        env::set_var("SHEETS_WEBAPP_URL", "");
        env::set_var("OPEN_BROWSER", "false");

        let config = Config::load();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_base_url, "http://localhost:9999/v1");
        assert!(config.sheets_webapp_url.is_none());
        assert!(!config.open_browser);
    }
}
