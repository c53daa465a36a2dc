use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::transcript::Turn;

/// Failure modes of the completion API call. The HTTP boundary
/// reports a single error string either way; the variants keep the
/// failure classes distinguishable in logs and for callers.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to reach completion API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("completion API rejected credentials (HTTP {status})")]
    Auth { status: StatusCode },
    #[error("completion API rate limited the request: {message}")]
    RateLimited { message: String },
    #[error("completion API returned HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("completion API returned an unparseable response: {0}")]
    Malformed(serde_json::Error),
    #[error("completion API response is missing reply content")]
    MissingContent,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

/// Request the next completion for the given transcript from an
/// OpenAI-compatible chat completion API.
pub async fn completion(
    messages: &[Turn],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<CompletionResponse, UpstreamError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(UpstreamError::Auth { status });
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(UpstreamError::RateLimited { message: body });
    }
    if !status.is_success() {
        return Err(UpstreamError::Api {
            status,
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(UpstreamError::Malformed)
}
