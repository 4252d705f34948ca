use axum::{
    extract::{Form, State},
    response::Html,
};
use chrono::Utc;
use tera::Context;
use validator::Validate;

use crate::{
    data::models::{ExplainForm, FormMessage, ProxyError, EXPLAIN_FAILURE},
    features::{webhook, words},
    state::AppState,
    utils::{render_template, validation_message},
};

pub async fn show_explain_form(State(state): State<AppState>) -> Html<String> {
    render(&state, &ExplainForm::default(), None, None)
}

pub async fn submit_explain_form(
    State(state): State<AppState>,
    Form(form): Form<ExplainForm>,
) -> Html<String> {
    if let Err(errors) = form.validate() {
        let message = FormMessage::Error(validation_message(&errors));
        return render(&state, &form, None, Some(message));
    }

    let payload = form.to_webhook_payload(Utc::now());
    let url = state.config.chat_webhook.as_str();

    match webhook::post_json(&state.client, url, &payload, EXPLAIN_FAILURE).await {
        Ok(reply) => {
            let answer = words::explanation(&reply);
            render(&state, &form, Some(answer.as_str()), None)
        }
        // The chat page reports workflow failures with one fixed message
        Err(ProxyError::Upstream { status, .. }) => {
            log::warn!("Explanation webhook answered {}", status);
            let message = FormMessage::Error(EXPLAIN_FAILURE.to_string());
            render(&state, &form, None, Some(message))
        }
        Err(e) => render(&state, &form, None, Some(FormMessage::Error(e.to_string()))),
    }
}

fn render(
    state: &AppState,
    form: &ExplainForm,
    answer: Option<&str>,
    message: Option<FormMessage>,
) -> Html<String> {
    let mut context = Context::new();
    context.insert("title", "Explain");
    context.insert("form", form);
    context.insert("answer", &answer);
    context.insert("message", &message);
    render_template(&state.templates, "explain.html", context)
}
