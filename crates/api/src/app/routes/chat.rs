use std::sync::Arc;

use axum::{Extension, Json};
use serde_json::json;

use crate::app::AppState;
use crate::app::dto::ChatRequest;
use crate::app::errors::ApiError;

/// Support chat. Replies come from the chat-completion upstream when a key
/// is configured, otherwise from the canned matcher; either way the
/// endpoint only fails on an empty message.
pub async fn chat(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let message = body.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(ApiError::Validation("메시지를 입력해주세요.".to_string()));
    }

    let reply = state.chat.reply(message).await;
    Ok(Json(json!({ "success": true, "reply": reply })))
}
