use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::{
    data::models::{ProxyError, GENERATE_TEXT_FAILURE},
    features::webhook,
    state::AppState,
};

pub async fn generate_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let url = webhook::require(state.config.generate_text_webhook.as_deref())?;

    let payload = super::parse_body(&body, GENERATE_TEXT_FAILURE)?;
    let reply = webhook::post_json(&state.client, url, &payload, GENERATE_TEXT_FAILURE).await?;

    Ok(Json(reply))
}
