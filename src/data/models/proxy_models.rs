use axum::http::StatusCode;
use thiserror::Error;

// Generic messages returned when a forwarded call fails locally
pub const GENERATE_TEXT_FAILURE: &str = "Failed to generate text from N8N";
pub const FETCH_WORDS_FAILURE: &str = "Failed to fetch words from N8N";
pub const ADD_WORD_FAILURE: &str = "Failed to add word to N8N";
pub const EXPLAIN_FAILURE: &str = "Failed to get explanation from N8N";

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Webhook URL not configured")]
    NotConfigured,
    #[error("N8N error: {body}")]
    Upstream { status: StatusCode, body: String },
    #[error("{context}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}")]
    MalformedBody {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
