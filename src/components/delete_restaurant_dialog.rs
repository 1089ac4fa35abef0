//! Delete Restaurant Dialog
//!
//! Confirmation modal; nothing is deleted until the user confirms.

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::modal::Modal;
use crate::api::ApiResult;
use crate::models::Restaurant;

/// Pending result of a delete request
pub type DeleteFuture = Pin<Box<dyn Future<Output = ApiResult<()>>>>;

pub fn confirmation_text(name: &str) -> String {
    format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        name
    )
}

/// Confirm handler: awaits `on_delete(ID)` and closes only if it succeeds.
/// A restaurant without an ID cannot be deleted, so this does nothing.
pub async fn confirm_delete<D, Fut, C>(restaurant: &Restaurant, on_delete: D, on_close: C)
where
    D: FnOnce(String) -> Fut,
    Fut: Future<Output = ApiResult<()>>,
    C: FnOnce(),
{
    let Some(id) = restaurant.saved_id() else {
        log::warn!("[DELETE] Restaurant has no ID, nothing to delete");
        return;
    };
    match on_delete(id.to_string()).await {
        Ok(()) => on_close(),
        Err(e) => log::debug!("[DELETE] Dialog stays open: {}", e),
    }
}

/// Delete confirmation dialog
#[component]
pub fn DeleteRestaurantDialog(
    restaurant: Restaurant,
    open: Signal<bool>,
    #[prop(into)] on_delete: Callback<String, DeleteFuture>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let text = confirmation_text(&restaurant.name);

    let confirm = move |_| {
        let restaurant = restaurant.clone();
        spawn_local(async move {
            confirm_delete(&restaurant, |id| on_delete.run(id), || on_close.run(())).await;
        });
    };

    view! {
        <Modal open=open title="Delete Restaurant" on_backdrop=on_close>
            <p class="dialog-text">{text.clone()}</p>
            <div class="dialog-actions">
                <button type="button" class="btn btn-outlined" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-danger" on:click=confirm.clone()>
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
