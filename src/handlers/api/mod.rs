pub mod generate;
pub mod words;

use serde_json::Value;

use crate::data::models::ProxyError;

// Request bodies are only checked for being JSON; the workflow owns the schema
fn parse_body(body: &[u8], failure: &'static str) -> Result<Value, ProxyError> {
    serde_json::from_slice(body).map_err(|source| {
        log::error!("Request body is not JSON: {}", source);
        ProxyError::MalformedBody {
            context: failure,
            source,
        }
    })
}
