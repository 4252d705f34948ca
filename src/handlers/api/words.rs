use axum::{
    body::Bytes,
    extract::State,
    http::header::CACHE_CONTROL,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    data::models::{ProxyError, ADD_WORD_FAILURE, FETCH_WORDS_FAILURE},
    features::webhook,
    state::AppState,
};

pub async fn list_words(State(state): State<AppState>) -> Result<impl IntoResponse, ProxyError> {
    let url = webhook::require(state.config.get_words_webhook.as_deref())?;
    let reply = webhook::get_json(&state.client, url, FETCH_WORDS_FAILURE).await?;

    Ok(([(CACHE_CONTROL, "no-store")], Json(reply)))
}

pub async fn add_word(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let url = webhook::require(state.config.add_words_webhook.as_deref())?;

    let payload = super::parse_body(&body, ADD_WORD_FAILURE)?;
    let reply = webhook::post_json(&state.client, url, &payload, ADD_WORD_FAILURE).await?;

    Ok(Json(reply))
}
