use axum::response::Html;
use chrono::{DateTime, SecondsFormat, Utc};
use tera::{Context, Tera};
use validator::ValidationErrors;

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(tera.render(template_name, &context).unwrap_or_else(|e| {
        log::error!("Failed to render {}: {:?}", template_name, e);
        format!("Error rendering template: {}", template_name)
    }))
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2025-06-01T08:30:00.000Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Joins the messages of every failed field into one line for inline display.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is required", field),
            })
        })
        .collect();
    messages.sort();
    messages.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::WordForm;
    use chrono::TimeZone;
    use validator::Validate;

    #[test]
    fn test_iso_timestamp_matches_browser_format() {
        let now = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 5).unwrap();
        assert_eq!(iso_timestamp(now), "2024-12-24T18:00:05.000Z");
    }

    #[test]
    fn test_validation_message_uses_field_messages() {
        let errors = WordForm::default().validate().unwrap_err();
        assert_eq!(validation_message(&errors), "German word is required");
    }
}
