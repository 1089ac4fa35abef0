//! Restaurant List Component
//!
//! Top-level view: owns the list store, renders one card per restaurant and
//! drives the add/edit/delete dialogs. Every successful mutation ends in a
//! full reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::delete_restaurant_dialog::{DeleteFuture, DeleteRestaurantDialog};
use super::error_banner::{DialogError, ErrorBanner};
use super::modal::Modal;
use super::restaurant_card::{card_key, RestaurantCard};
use super::restaurant_form::{FormMode, RestaurantForm};
use crate::context::AppContext;
use crate::controller::ListController;
use crate::models::{Restaurant, RestaurantCreateInput};
use crate::store::{dispatch, ListEvent, ListState, ListStateStoreFields};

#[component]
pub fn RestaurantList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let store = Store::new(ListState::default());
    let controller = ListController::new(ctx.api());
    let send = move |event: ListEvent| dispatch(store, event);

    // Load once on mount
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.load(&send).await {
                    log::debug!("[LIST] Initial load failed: {}", e);
                }
            });
        });
    }

    let on_add = {
        let controller = controller.clone();
        Callback::new(move |input: RestaurantCreateInput| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.add(input, &send).await {
                    log::debug!("[LIST] Add dialog stays open: {}", e);
                }
            });
        })
    };

    let on_update = {
        let controller = controller.clone();
        Callback::new(move |(id, data): (String, RestaurantCreateInput)| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.update(&id, data, &send).await {
                    log::debug!("[LIST] Edit dialog stays open: {}", e);
                }
            });
        })
    };

    let on_delete = Callback::new(move |id: String| -> DeleteFuture {
        let controller = controller.clone();
        Box::pin(async move { controller.delete(&id, &send).await })
    });

    let cancel = Callback::new(move |_: ()| send(ListEvent::Cancelled));
    let dismiss = Callback::new(move |_: ()| send(ListEvent::ErrorDismissed));

    // Open dialogs cover the page, so they show the error themselves
    let page_error = Signal::derive(move || store.with(|s| s.page_error().map(str::to_string)));
    provide_context(DialogError {
        message: Signal::derive(move || store.with(|s| s.dialog_error().map(str::to_string))),
        on_dismiss: dismiss,
    });

    // Selection-derived dialog visibility
    let adding = Memo::new(move |_| store.dialog().get().is_adding());
    let editing = Memo::new(move |_| store.dialog().get().editing().cloned());
    let deleting = Memo::new(move |_| store.dialog().get().deleting().cloned());

    view! {
        <div class="restaurant-list">
            <div class="list-header">
                <h1>"Restaurants"</h1>
                <button type="button" class="btn btn-primary" on:click=move |_| send(ListEvent::AddClicked)>
                    <span class="icon">"+"</span>
                    "Add Restaurant"
                </button>
            </div>

            <ErrorBanner message=page_error on_dismiss=dismiss />

            <div class="card-grid">
                <For
                    each=move || store.restaurants().get()
                    key=card_key
                    children=move |restaurant: Restaurant| view! {
                        <RestaurantCard
                            restaurant=restaurant
                            on_edit=move |r: Restaurant| send(ListEvent::EditClicked(r))
                            on_delete=move |r: Restaurant| send(ListEvent::DeleteClicked(r))
                        />
                    }
                />
            </div>

            // Add Restaurant Dialog
            <Modal open=Signal::derive(move || adding.get()) title=FormMode::Create.dialog_title()>
                <RestaurantForm mode=FormMode::Create on_submit=on_add on_close=cancel />
            </Modal>

            // Edit Restaurant Dialog
            <Modal open=Signal::derive(move || editing.get().is_some()) title=FormMode::Update.dialog_title()>
                {move || editing.get().map(|restaurant| {
                    let id = restaurant.id.clone();
                    view! {
                        <RestaurantForm
                            mode=FormMode::Update
                            restaurant=restaurant
                            on_submit=move |data: RestaurantCreateInput| on_update.run((id.clone(), data))
                            on_close=cancel
                        />
                    }
                })}
            </Modal>

            // Delete Restaurant Dialog
            {move || deleting.get().map(|restaurant| view! {
                <DeleteRestaurantDialog
                    restaurant=restaurant
                    open=Signal::derive(move || deleting.get().is_some())
                    on_delete=on_delete
                    on_close=cancel
                />
            })}
        </div>
    }
}
