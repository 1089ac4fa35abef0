//! API Errors
//!
//! Failures surfaced by the restaurant API client.

use thiserror::Error;

/// Errors returned by [`RestaurantApi`](super::RestaurantApi) operations.
///
/// `NotFound` gets its own variant since the backend answers 404 for an
/// unknown restaurant ID. Every other non-2xx response lands in `Status`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered 404.
    #[error("Restaurant not found")]
    NotFound,

    /// The backend answered with a non-2xx status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("Encode error: {0}")]
    Encode(String),

    /// The response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Convert a rejected JS promise value into a network error.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ApiError::Network(message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
