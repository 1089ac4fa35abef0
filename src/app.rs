//! Restaurant Manager App
//!
//! Root shell: provides context and centers the restaurant list.

use leptos::prelude::*;

use crate::components::RestaurantList;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    view! {
        <div class="app-shell">
            <RestaurantList />
        </div>
    }
}
