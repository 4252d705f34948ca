use serde_json::Value;

use super::values::{as_text, truthy};

/// Generated text from the text-generation workflow, if it produced any.
pub fn generated_text(reply: &Value) -> Option<String> {
    first_string(reply, &["generatedText", "text", "output"])
}

/// Answer from the explanation workflow; falls back to the whole document.
pub fn explanation(reply: &Value) -> String {
    first_string(reply, &["output", "text", "message", "response"])
        .unwrap_or_else(|| reply.to_string())
}

fn first_string(reply: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| reply.get(*key))
        .find(|value| truthy(value))
        .map(as_text)
}
