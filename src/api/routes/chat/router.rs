//! Router for the chat relay API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::openai::chat;
use crate::transcript::{Role, Turn};

type SharedState = Arc<RwLock<AppState>>;

/// Relay a user message to the completion API and persist the
/// completed exchange.
async fn send_message(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, crate::api::public::ApiError> {
    let (store, api_hostname, api_key, model) = {
        let shared_state = state.read().expect("Unable to read share state");
        let AppConfig {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            ..
        } = &shared_state.config;
        (
            shared_state.store.clone(),
            openai_api_hostname.clone(),
            openai_api_key.clone(),
            openai_model.clone(),
        )
    };

    // Held across load, completion, and save so a concurrent request
    // can't overwrite this exchange.
    let _guard = store.guard().await;

    let mut transcript = store.load().await?;

    // The message may be empty; it is forwarded as-is.
    transcript.push(Turn::new(Role::User, &payload.message));

    // On an upstream failure the appended user turn is dropped along
    // with the in-memory transcript and the stored file stays
    // untouched. Only completed exchanges are persisted.
    let reply = chat(&transcript, &api_hostname, &api_key, &model).await?;

    let response = public::ChatResponse {
        response: reply.content.clone(),
    };
    transcript.push(reply);
    store.save(&transcript).await?;

    Ok(Json(response))
}

/// Reset the persisted transcript to the seed system turn
async fn clear_transcript(
    State(state): State<SharedState>,
) -> Result<Json<public::ClearResponse>, crate::api::public::ApiError> {
    let store = {
        let shared_state = state.read().expect("Unable to read share state");
        shared_state.store.clone()
    };

    let _guard = store.guard().await;
    store.reset().await?;

    Ok(Json(public::ClearResponse {
        status: "History cleared".to_string(),
    }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(send_message))
        .route("/clear", post(clear_transcript))
}
