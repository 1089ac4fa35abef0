//! Restaurant API Client
//!
//! Bindings to the `/restaurants` REST resource, organized as a pure
//! request layer, a browser transport, and the trait the UI depends on.

mod error;
mod fetch;
mod request;

use async_trait::async_trait;

use crate::models::{Restaurant, RestaurantCreateInput};

pub use error::{ApiError, ApiResult};
pub use fetch::FetchApi;

/// Restaurant persistence as seen by the UI
///
/// No retries, no timeouts, no validation: failures come back as
/// [`ApiError`] for the caller to handle.
#[async_trait(?Send)]
pub trait RestaurantApi {
    /// Fetch the full collection
    async fn get_restaurants(&self) -> ApiResult<Vec<Restaurant>>;

    /// Create a restaurant, returning the server-assigned record
    async fn add_restaurant(&self, input: &RestaurantCreateInput) -> ApiResult<Restaurant>;

    /// Replace the mutable fields of a restaurant
    async fn update_restaurant(&self, id: &str, data: &RestaurantCreateInput) -> ApiResult<()>;

    /// Delete a restaurant by ID
    async fn delete_restaurant(&self, id: &str) -> ApiResult<()>;
}
