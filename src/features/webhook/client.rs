use axum::http::header::CACHE_CONTROL;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::data::models::ProxyError;

/// Webhook URL, or `NotConfigured` when the variable was unset.
pub fn require(url: Option<&str>) -> Result<&str, ProxyError> {
    url.ok_or(ProxyError::NotConfigured)
}

/// POSTs `body` as JSON to the webhook and returns its JSON reply.
///
/// `failure` is the message reported when the call fails locally (transport
/// error or a success reply that is not JSON).
pub async fn post_json(
    client: &Client,
    url: &str,
    body: &Value,
    failure: &'static str,
) -> Result<Value, ProxyError> {
    log::debug!("Forwarding POST to {}", url);

    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|source| transport(failure, source))?;

    relay(response, failure).await
}

/// GETs the webhook with caching disabled and returns its JSON reply.
pub async fn get_json(
    client: &Client,
    url: &str,
    failure: &'static str,
) -> Result<Value, ProxyError> {
    log::debug!("Forwarding GET to {}", url);

    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|source| transport(failure, source))?;

    relay(response, failure).await
}

async fn relay(response: Response, failure: &'static str) -> Result<Value, ProxyError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|source| transport(failure, source))?;
        log::warn!("Webhook answered {}: {}", status, body);
        return Err(ProxyError::Upstream { status, body });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| transport(failure, source))?;

    serde_json::from_slice(&bytes).map_err(|source| {
        log::error!("Webhook reply is not JSON: {}", source);
        ProxyError::MalformedBody {
            context: failure,
            source,
        }
    })
}

fn transport(context: &'static str, source: reqwest::Error) -> ProxyError {
    log::error!("Webhook call failed: {}", source);
    ProxyError::Transport { context, source }
}
