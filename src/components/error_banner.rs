//! Error Banner Component

use leptos::prelude::*;

/// The list's current error as seen by whichever dialog is open
#[derive(Clone, Copy)]
pub struct DialogError {
    pub message: Signal<Option<String>>,
    pub on_dismiss: Callback<()>,
}

/// Dismissable alert; renders nothing while `message` is `None`
#[component]
pub fn ErrorBanner(
    message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="error-banner" role="alert">
                <span>{text}</span>
                <button type="button" class="btn btn-text" on:click=move |_| on_dismiss.run(())>
                    "Dismiss"
                </button>
            </div>
        })}
    }
}
