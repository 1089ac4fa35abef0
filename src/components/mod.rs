//! UI Components
//!
//! Leptos components for the restaurant list and its dialogs.

mod delete_restaurant_dialog;
mod error_banner;
mod modal;
mod restaurant_card;
mod restaurant_form;
mod restaurant_list;

pub use restaurant_list::RestaurantList;
