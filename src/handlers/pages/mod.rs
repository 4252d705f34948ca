pub mod add_word;
pub mod explain;
pub mod generate;
pub mod words;

use axum::{extract::State, response::Html};
use tera::Context;

use crate::{state::AppState, utils::render_template};

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let mut context = Context::new();
    context.insert("title", "DeutschLern");
    render_template(&state.templates, "index.html", context)
}
