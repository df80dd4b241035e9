//! Outbound call to an OpenAI-compatible `/chat/completions` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Sends `prompt` as a single user message and returns the first choice's text.
pub async fn complete(state: &AppState, prompt: &str) -> Result<String, AppError> {
    let config = &state.config;
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(AppError::NotConfigured("OPENAI_API_KEY"))?;

    let body = ChatRequest {
        model: &config.openai_model,
        messages: [ChatMessage {
            role: "user",
            content: prompt,
        }],
        temperature: TEMPERATURE,
    };

    let response = state
        .http
        .post(format!("{}/chat/completions", config.openai_base_url))
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    first_choice(response.json().await?)
}

fn first_choice(response: ChatResponse) -> Result<String, AppError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(AppError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Wash the rice."}},
                           {"message":{"role":"assistant","content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice(response).unwrap(), "Wash the rice.");
    }

    #[test]
    fn empty_choices_are_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_choice(response), Err(AppError::EmptyResponse)));

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(first_choice(response), Err(AppError::EmptyResponse)));
    }
}
