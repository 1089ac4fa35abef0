//! Browser Transport
//!
//! Executes [`HttpRequest`]s with `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::error::{ApiError, ApiResult};
use super::request::{HttpRequest, HttpResponse, RestaurantEndpoints};
use super::RestaurantApi;
use crate::models::{Restaurant, RestaurantCreateInput};

/// [`RestaurantApi`] backed by the browser's fetch API
#[derive(Debug, Clone)]
pub struct FetchApi {
    endpoints: RestaurantEndpoints,
}

impl FetchApi {
    pub fn new(api_base: &str) -> Self {
        Self {
            endpoints: RestaurantEndpoints::new(api_base),
        }
    }

    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        log::debug!("[API] {} {}", req.method.as_str(), req.url);

        let init = RequestInit::new();
        init.set_method(req.method.as_str());
        if let Some(body) = &req.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &init).map_err(ApiError::from_js)?;
        for (name, value) in &req.headers {
            request
                .headers()
                .set(name, value)
                .map_err(ApiError::from_js)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let raw = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?;
        let response: Response = raw.dyn_into().map_err(ApiError::from_js)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
            .await
            .map_err(ApiError::from_js)?;

        if !response.ok() {
            log::warn!("[API] {} {} -> {}", req.method.as_str(), req.url, status);
        }

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[async_trait(?Send)]
impl RestaurantApi for FetchApi {
    async fn get_restaurants(&self) -> ApiResult<Vec<Restaurant>> {
        let response = self.send(self.endpoints.build_list()).await?;
        self.endpoints.parse_list(response)
    }

    async fn add_restaurant(&self, input: &RestaurantCreateInput) -> ApiResult<Restaurant> {
        let response = self.send(self.endpoints.build_create(input)?).await?;
        self.endpoints.parse_one(response)
    }

    async fn update_restaurant(&self, id: &str, data: &RestaurantCreateInput) -> ApiResult<()> {
        let response = self.send(self.endpoints.build_update(id, data)?).await?;
        self.endpoints.parse_empty(response)
    }

    async fn delete_restaurant(&self, id: &str) -> ApiResult<()> {
        let response = self.send(self.endpoints.build_delete(id)).await?;
        self.endpoints.parse_empty(response)
    }
}
