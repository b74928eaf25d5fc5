pub mod dashboard;

use crate::settings;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Faults surfaced at the fetch boundary. Everything below this boundary
/// (shaping, classification) degrades to safe defaults instead of erroring.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("malformed payload from {endpoint}: {reason}")]
    MalformedPayload { endpoint: String, reason: String },
}

// API base is retrieved from settings; empty base means same-origin requests.
fn api_base() -> String {
    settings::get_settings().api_base
}

/// Common GET request handler. Returns the raw JSON body; shaping into the
/// data model is the caller's concern.
pub async fn get_raw(endpoint: &str) -> Result<Value, FetchError> {
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error = FetchError::Transport {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        };
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    if !response.ok() {
        let error = FetchError::Transport {
            endpoint: endpoint.to_string(),
            reason: format!("HTTP error: {}", response.status()),
        };
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body: Value = response.json().await.map_err(|e| {
        let error = FetchError::MalformedPayload {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        };
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}
