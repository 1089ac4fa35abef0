//! Restaurant Form Component
//!
//! Controlled name/location/cuisine form shared by the add and edit dialogs.

use leptos::prelude::*;

use crate::models::{DraftField, Restaurant, RestaurantCreateInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    /// Title of the modal hosting the form
    pub fn dialog_title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Restaurant",
            FormMode::Update => "Edit Restaurant",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Restaurant",
            FormMode::Update => "Update Restaurant",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Restaurant",
            FormMode::Update => "Update Restaurant",
        }
    }
}

const FIELDS: [(DraftField, &str); 3] = [
    (DraftField::Name, "Restaurant Name"),
    (DraftField::Location, "Location"),
    (DraftField::Cuisine, "Cuisine Type"),
];

/// Starting draft: the existing record in update mode, blank otherwise
pub fn initial_draft(mode: FormMode, restaurant: Option<&Restaurant>) -> RestaurantCreateInput {
    match mode {
        FormMode::Create => RestaurantCreateInput::default(),
        FormMode::Update => RestaurantCreateInput::seeded(restaurant),
    }
}

/// Form for creating or updating a restaurant
///
/// Submits the draft verbatim. "Clear" blanks the draft, "Cancel" closes
/// without submitting.
#[component]
pub fn RestaurantForm(
    mode: FormMode,
    #[prop(optional)] restaurant: Option<Restaurant>,
    #[prop(into)] on_submit: Callback<RestaurantCreateInput>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(initial_draft(mode, restaurant.as_ref()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("[FORM] Submit {:?}", mode);
        on_submit.run(draft.get());
    };

    view! {
        <div class="restaurant-form">
            <h3 class="form-heading">{mode.heading()}</h3>
            <form on:submit=submit>
                {FIELDS.iter().map(|&(field, label)| view! {
                    <label class="form-field">
                        <span class="form-label">{label}</span>
                        <input
                            type="text"
                            name=field.as_str()
                            required=true
                            prop:value=move || draft.with(|d| d.get(field).to_string())
                            on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                        />
                    </label>
                }).collect_view()}
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-outlined"
                        on:click=move |_| draft.update(|d| d.clear())
                    >
                        "Clear"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {mode.submit_label()}
                    </button>
                </div>
            </form>
            <div class="dialog-actions">
                <button type="button" class="btn btn-outlined" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
