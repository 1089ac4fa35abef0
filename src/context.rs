//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use crate::api::FetchApi;
use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// API client for the configured base path
    pub fn api(&self) -> FetchApi {
        FetchApi::new(&self.config.api_base)
    }
}
