use crate::transcript::{Role, Turn};

use super::core::{UpstreamError, completion};

/// Runs the next turn in chat by passing the transcript to the LLM
/// and extracting the reply as an assistant turn.
pub async fn chat(
    history: &[Turn],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Turn, UpstreamError> {
    let resp = completion(history, api_hostname, api_key, model).await?;

    let content = resp
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(UpstreamError::MissingContent)?;

    Ok(Turn::new(Role::Assistant, &content))
}
