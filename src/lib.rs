//! DeutschLern: a German vocabulary trainer whose storage and text generation
//! live in external n8n workflows.
//!
//! The server forwards JSON to the configured webhooks (`/api/*`), and renders
//! the word form, text generator, word list and explanation chat pages.

use anyhow::Context as _;
use axum::{
    routing::{get, get_service, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod state;
pub mod utils;

use config::Config;
use handlers::{api, pages};
use state::AppState;

pub fn app(state: AppState) -> Router {
    // Proxies in front of the n8n webhooks
    let api_router = Router::new()
        .route("/generate", post(api::generate::generate_text))
        .route("/words", get(api::words::list_words).post(api::words::add_word));

    let static_files = get_service(ServeDir::new(&state.config.static_dir));

    Router::new()
        .route("/", get(pages::home))
        .route(
            "/add",
            get(pages::add_word::show_word_form).post(pages::add_word::submit_word_form),
        )
        .route(
            "/generate",
            get(pages::generate::show_generate_form).post(pages::generate::submit_generate_form),
        )
        .route("/words", get(pages::words::show_words))
        .route(
            "/explain",
            get(pages::explain::show_explain_form).post(pages::explain::submit_explain_form),
        )
        .nest("/api", api_router)
        .nest_service("/static", static_files)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let bind_addr = config.bind_addr.clone();

    let state = AppState::new(config).context("Template parsing error")?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    log::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("Server error")?;
    Ok(())
}
