use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, ShapeError};
use crate::models::ErrorResponse;

// The API wraps failure payloads as `{"error": {"status": .., "message": ..}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Wrapped { error: ErrorResponse },
    Bare(ErrorResponse),
}

/// Decodes a response body that has already been received.
///
/// Success statuses decode as `T`; any other status is decoded as an
/// [`ErrorResponse`] and returned as [`ShapeError::Api`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        let error = decode_error(status, body);
        tracing::warn!("API error {}: {}", error.status, error.message);
        return Err(ShapeError::Api(error));
    }

    serde_json::from_str(body).map_err(|e| {
        let err = ShapeError::decode::<T>(e);
        tracing::error!("{}", err);
        tracing::debug!("Undecodable body: {}", truncate(body, 500));
        err
    })
}

/// Decodes a failure payload, falling back to the raw body when it is not
/// the documented JSON shape.
pub fn decode_error(status: u16, body: &str) -> ErrorResponse {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Wrapped { error }) | Ok(ErrorBody::Bare(error)) => error,
        Err(_) => {
            let trimmed = body.trim();
            let message = if trimmed.is_empty() {
                format!("HTTP status {status}")
            } else {
                truncate(trimmed, 200).to_string()
            };
            ErrorResponse { message, status }
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
