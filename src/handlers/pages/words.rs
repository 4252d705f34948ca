use axum::{
    extract::{Query, State},
    http::header::CACHE_CONTROL,
    response::{Html, IntoResponse},
};
use chrono::Utc;
use serde::Deserialize;
use tera::Context;

use crate::{
    data::models::{WordCard, WordListView, FETCH_WORDS_FAILURE},
    features::{webhook, words},
    state::AppState,
    utils::render_template,
};

#[derive(Debug, Default, Deserialize)]
pub struct WordsQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn show_words(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> impl IntoResponse {
    let mut context = Context::new();
    context.insert("title", "My Words");

    let result = match webhook::require(state.config.get_words_webhook.as_deref()) {
        Ok(url) => webhook::get_json(&state.client, url, FETCH_WORDS_FAILURE).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(payload) => {
            log::debug!("Fetched words data: {}", payload);
            let entries = words::normalize_words(&payload, Utc::now());
            let cards: Vec<WordCard> = entries
                .iter()
                .map(|entry| WordCard::new(entry, words::word_matches(entry, &query.q)))
                .collect();
            let view = WordListView {
                total: entries.len(),
                shown: words::filter_words(&entries, &query.q).len(),
                query: &query.q,
                words: cards,
            };
            context.insert("list", &view);
        }
        Err(e) => {
            context.insert("error", &e.to_string());
        }
    }

    let page: Html<String> = render_template(&state.templates, "words.html", context);
    ([(CACHE_CONTROL, "no-store")], page)
}
