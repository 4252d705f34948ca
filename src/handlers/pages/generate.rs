use axum::{
    extract::{Form, State},
    response::Html,
};
use chrono::Utc;
use tera::Context;
use validator::Validate;

use crate::{
    data::models::{FormMessage, GenerateForm, GENERATE_TEXT_FAILURE},
    features::{webhook, words},
    state::AppState,
    utils::{render_template, validation_message},
};

const NO_TEXT_GENERATED: &str =
    "No text was generated. Please check your n8n workflow configuration.";

pub async fn show_generate_form(State(state): State<AppState>) -> Html<String> {
    render(&state, &GenerateForm::default(), None, None)
}

pub async fn submit_generate_form(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    if let Err(errors) = form.validate() {
        let message = FormMessage::Error(validation_message(&errors));
        return render(&state, &form, None, Some(message));
    }

    let payload = form.to_webhook_payload(Utc::now());
    let result = match webhook::require(state.config.generate_text_webhook.as_deref()) {
        Ok(url) => webhook::post_json(&state.client, url, &payload, GENERATE_TEXT_FAILURE).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(reply) => match words::generated_text(&reply) {
            Some(text) => render(&state, &form, Some(text.as_str()), None),
            None => {
                let message = FormMessage::Error(NO_TEXT_GENERATED.to_string());
                render(&state, &form, None, Some(message))
            }
        },
        Err(e) => render(&state, &form, None, Some(FormMessage::Error(e.to_string()))),
    }
}

fn render(
    state: &AppState,
    form: &GenerateForm,
    generated_text: Option<&str>,
    message: Option<FormMessage>,
) -> Html<String> {
    let mut context = Context::new();
    context.insert("title", "Generate Text");
    context.insert("form", form);
    context.insert("generated_text", &generated_text);
    context.insert("message", &message);
    render_template(&state.templates, "generate.html", context)
}
