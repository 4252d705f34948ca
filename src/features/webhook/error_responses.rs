use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ProxyError;

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
