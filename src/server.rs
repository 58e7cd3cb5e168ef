//! Webhook edge — thin by design.
//!
//! Two routes: `GET /` health check and `POST /webhook` for Telegram
//! update callbacks. The handler pulls the chat id and text out of the
//! update envelope and hands them to the bot; updates without text
//! (stickers, edits, channel posts) are acknowledged with 200 and
//! skipped so Telegram doesn't redeliver them.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::bot::{Bot, DeliveryOutcome};

/// Telegram update envelope, reduced to the fields the bot consumes.
/// Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct Update {
    message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
struct IncomingMessage {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<Bot>,
}

/// Build the webhook router.
pub fn routes(bot: Arc<Bot>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook", post(webhook))
        .with_state(AppState { bot })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "BERT is running",
        "message": "No munkey business. Only BERT business.",
    }))
}

async fn webhook(State(state): State<AppState>, Json(update): Json<Update>) -> StatusCode {
    let Some(message) = update.message else {
        debug!("Update without message; acknowledging");
        return StatusCode::OK;
    };
    let Some(text) = message.text else {
        debug!("Message without text; acknowledging");
        return StatusCode::OK;
    };

    match state.bot.handle_incoming(message.chat.id, &text).await {
        DeliveryOutcome::Delivered => StatusCode::OK,
        DeliveryOutcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
