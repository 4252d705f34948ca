use axum::{
    extract::{Form, State},
    response::Html,
};
use chrono::Utc;
use tera::Context;
use validator::Validate;

use crate::{
    data::models::{FormMessage, WordForm, ADD_WORD_FAILURE},
    features::webhook,
    state::AppState,
    utils::{render_template, validation_message},
};

pub async fn show_word_form(State(state): State<AppState>) -> Html<String> {
    render(&state, &WordForm::default(), None)
}

#[axum::debug_handler]
pub async fn submit_word_form(
    State(state): State<AppState>,
    Form(form): Form<WordForm>,
) -> Html<String> {
    if let Err(errors) = form.validate() {
        let message = FormMessage::Error(validation_message(&errors));
        return render(&state, &form, Some(message));
    }

    let payload = form.to_webhook_payload(Utc::now());
    let result = match webhook::require(state.config.add_words_webhook.as_deref()) {
        Ok(url) => webhook::post_json(&state.client, url, &payload, ADD_WORD_FAILURE).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => {
            log::info!("Added word {:?}", form.german);
            let message = FormMessage::Success(format!("\"{}\" added successfully!", form.german));
            render(&state, &WordForm::default(), Some(message))
        }
        Err(e) => render(&state, &form, Some(FormMessage::Error(e.to_string()))),
    }
}

fn render(state: &AppState, form: &WordForm, message: Option<FormMessage>) -> Html<String> {
    let mut context = Context::new();
    context.insert("title", "Add Words");
    context.insert("form", form);
    context.insert("message", &message);
    render_template(&state.templates, "add_word.html", context)
}
