use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::utils::iso_timestamp;

pub const DEFAULT_WORD_COUNT: &str = "100";

// Word submission form
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct WordForm {
    #[validate(length(min = 1, message = "German word is required"))]
    pub german: String,
    pub english: String,
    pub arabic: String,
    pub part_of_speech: String,
    pub example: String,
}

impl WordForm {
    /// Body expected by the add-words workflow, which keys fields in German.
    pub fn to_webhook_payload(&self, now: DateTime<Utc>) -> Value {
        json!({
            "deutsch": self.german,
            "englisch": self.english,
            "arabisch": self.arabic,
            "speech": self.part_of_speech,
            "example": self.example,
            "timestamp": iso_timestamp(now),
        })
    }
}

// Text generation form
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct GenerateForm {
    #[validate(length(min = 1, message = "Learning request is required"))]
    pub prompt: String,
    pub word_count: String,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            word_count: DEFAULT_WORD_COUNT.to_string(),
        }
    }
}

impl GenerateForm {
    pub fn to_webhook_payload(&self, now: DateTime<Utc>) -> Value {
        json!({
            "prompt": self.prompt,
            "wordCount": self.word_count,
            "timestamp": iso_timestamp(now),
        })
    }
}

// Explanation chat form
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ExplainForm {
    #[validate(length(min = 1, message = "Question is required"))]
    pub message: String,
}

impl ExplainForm {
    pub fn to_webhook_payload(&self, now: DateTime<Utc>) -> Value {
        json!({
            "message": self.message,
            "timestamp": iso_timestamp(now),
        })
    }
}

/// Inline acknowledgment or error shown under a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum FormMessage {
    Success(String),
    Error(String),
}
