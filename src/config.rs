use std::env;

/// Explanation workflow. Compiled in rather than read from the environment,
/// unlike the other webhooks.
pub const CHAT_WEBHOOK_URL: &str =
    "https://n8n.almanassikalarabi.com/webhook/aaaf7cff-3b92-46fe-8892-6e6541d16d63NEXT_PUBLIC_N8N_CHAT_WEBHOOK_post";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub templates_glob: String,
    pub static_dir: String,
    pub generate_text_webhook: Option<String>,
    pub get_words_webhook: Option<String>,
    pub add_words_webhook: Option<String>,
    pub chat_webhook: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: var_or("BIND_ADDR", "127.0.0.1:5000"),
            templates_glob: var_or("TEMPLATES_GLOB", "templates/**/*.html"),
            static_dir: var_or("STATIC_DIR", "static"),
            generate_text_webhook: webhook("N8N_GENERATE_TEXT_WEBHOOK"),
            get_words_webhook: webhook("N8N_GET_WORDS_WEBHOOK"),
            add_words_webhook: webhook("N8N_ADD_WORDS_WEBHOOK"),
            chat_webhook: CHAT_WEBHOOK_URL.to_string(),
        }
    }
}

impl Default for Config {
    /// Local defaults with no webhooks configured.
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            templates_glob: "templates/**/*.html".into(),
            static_dir: "static".into(),
            generate_text_webhook: None,
            get_words_webhook: None,
            add_words_webhook: None,
            chat_webhook: CHAT_WEBHOOK_URL.to_string(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn webhook(key: &str) -> Option<String> {
    let url = non_empty(env::var(key).ok());
    if url.is_none() {
        log::warn!("{} is not set, requests using it will fail", key);
    }
    url
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
