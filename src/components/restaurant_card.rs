//! Restaurant Card Component

use leptos::prelude::*;

use crate::models::Restaurant;

/// Key for `For`: every displayed field, so an edited record re-renders
pub fn card_key(restaurant: &Restaurant) -> (String, String, String, String) {
    (
        restaurant.id.clone(),
        restaurant.name.clone(),
        restaurant.cuisine.clone(),
        restaurant.location.clone(),
    )
}

/// Subtitle line: cuisine • location
pub fn card_meta(restaurant: &Restaurant) -> String {
    format!("{} • {}", restaurant.cuisine, restaurant.location)
}

/// One row of the list: name, cuisine • location, Edit/Delete actions
#[component]
pub fn RestaurantCard(
    restaurant: Restaurant,
    #[prop(into)] on_edit: Callback<Restaurant>,
    #[prop(into)] on_delete: Callback<Restaurant>,
) -> impl IntoView {
    let meta = card_meta(&restaurant);
    let for_edit = restaurant.clone();
    let for_delete = restaurant.clone();

    view! {
        <div class="card">
            <div class="card-body">
                <h3 class="card-title">{restaurant.name}</h3>
                <div class="card-meta">{meta}</div>
            </div>
            <div class="card-actions">
                <button
                    type="button"
                    class="btn btn-outlined btn-small"
                    on:click=move |_| on_edit.run(for_edit.clone())
                >
                    <span class="icon">"✎"</span>
                    "Edit"
                </button>
                <button
                    type="button"
                    class="btn btn-outlined btn-small btn-danger"
                    on:click=move |_| on_delete.run(for_delete.clone())
                >
                    <span class="icon">"🗑"</span>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
