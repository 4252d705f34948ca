use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::data::models::WordEntry;
use crate::utils::iso_timestamp;

use super::values::{as_text, truthy};

/// Turns a word-list payload of unknown shape into display entries.
///
/// Accepted shapes, first match wins:
/// `{ "items": [...] }`, a bare array, `{ "words": [...] }`,
/// a single word object (has `deutsch` or `german`). Anything else is empty.
///
/// `now` stamps entries that carry no `addedAt`, so the result is a pure
/// function of `(payload, now)`.
pub fn normalize_words(payload: &Value, now: DateTime<Utc>) -> Vec<WordEntry> {
    let added_at = iso_timestamp(now);

    raw_items(payload)
        .iter()
        .enumerate()
        .map(|(index, item)| map_item(index, item, &added_at))
        .collect()
}

fn raw_items(payload: &Value) -> &[Value] {
    if let Some(items) = payload.get("items").and_then(Value::as_array) {
        return items;
    }
    if let Some(items) = payload.as_array() {
        return items;
    }
    if let Some(words) = payload.get("words").and_then(Value::as_array) {
        return words;
    }
    if payload.get("deutsch").is_some_and(truthy) || payload.get("german").is_some_and(truthy) {
        return std::slice::from_ref(payload);
    }
    &[]
}

fn map_item(index: usize, item: &Value, added_at: &str) -> WordEntry {
    match item {
        Value::String(german) => WordEntry::bare(index.to_string(), german.as_str(), added_at),
        Value::Object(fields) => WordEntry {
            id: first_present_text(fields, &["row_number", "id"]).unwrap_or_else(|| index.to_string()),
            german: first_text(fields, &["deutsch", "german"]).unwrap_or_default(),
            english: first_text(fields, &["englisch", "english"]).unwrap_or_default(),
            arabic: first_text(fields, &["arabisch", "arabic"]).unwrap_or_default(),
            part_of_speech: first_text(fields, &["speech", "partOfSpeech"]).unwrap_or_default(),
            example: first_text(fields, &["example"]).unwrap_or_default(),
            added_at: first_text(fields, &["addedAt"]).unwrap_or_else(|| added_at.to_string()),
        },
        _ => WordEntry::bare(index.to_string(), "", added_at),
    }
}

// Ids are stringified before the check, so `0` and `false` still count
fn first_present_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter(|value| !value.is_null())
        .map(as_text)
        .find(|text| !text.is_empty())
}

// First key whose value is truthy, rendered as text
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| truthy(value))
        .map(as_text)
}
