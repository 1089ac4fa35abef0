//! Modal Dialog Shell
//!
//! Backdrop + centered panel with a title. Children are only mounted while open.
//! The backdrop covers the page, so a provided [`DialogError`] is shown
//! inside the panel.

use leptos::prelude::*;

use super::error_banner::{DialogError, ErrorBanner};

#[component]
pub fn Modal(
    open: Signal<bool>,
    #[prop(into)] title: String,
    /// Called on a click outside the panel; the backdrop is inert without it
    #[prop(optional)]
    on_backdrop: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_error = use_context::<DialogError>();

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                on:click=move |_| {
                    if let Some(cb) = on_backdrop {
                        cb.run(());
                    }
                }
            >
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="modal-title">{title.clone()}</h2>
                    {dialog_error.map(|e| view! {
                        <ErrorBanner message=e.message on_dismiss=e.on_dismiss />
                    })}
                    <div class="modal-content">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
