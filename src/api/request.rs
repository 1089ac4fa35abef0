//! Request Building and Response Parsing
//!
//! Pure half of the API client: turns operations into [`HttpRequest`]
//! values and [`HttpResponse`] values back into models. The transport in
//! `fetch.rs` performs the round trip in between.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use crate::models::{Restaurant, RestaurantCreateInput};

/// Characters escaped when an ID is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// URL layout of the `/restaurants` resource under a base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantEndpoints {
    base: String,
}

impl RestaurantEndpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/restaurants", self.base)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!(
            "{}/restaurants/{}",
            self.base,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    // ========================
    // Builders
    // ========================

    pub fn build_list(&self) -> HttpRequest {
        bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_create(&self, input: &RestaurantCreateInput) -> ApiResult<HttpRequest> {
        with_json(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update(&self, id: &str, data: &RestaurantCreateInput) -> ApiResult<HttpRequest> {
        with_json(HttpMethod::Put, self.item_url(id), data)
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        bare(HttpMethod::Delete, self.item_url(id))
    }

    // ========================
    // Parsers
    // ========================

    pub fn parse_list(&self, response: HttpResponse) -> ApiResult<Vec<Restaurant>> {
        decode(response)
    }

    pub fn parse_one(&self, response: HttpResponse) -> ApiResult<Restaurant> {
        decode(response)
    }

    /// Accept any 2xx and discard the body.
    pub fn parse_empty(&self, response: HttpResponse) -> ApiResult<()> {
        check_status(&response)
    }
}

fn bare(method: HttpMethod, url: String) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json(
    method: HttpMethod,
    url: String,
    payload: &RestaurantCreateInput,
) -> ApiResult<HttpRequest> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn check_status(response: &HttpResponse) -> ApiResult<()> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Status {
            status,
            body: response.body.clone(),
        }),
    }
}
