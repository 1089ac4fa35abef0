//! Restaurant List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutation
//! goes through [`ListState::apply`], the reducer for the list's
//! dialog/selection state machine.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Restaurant;

/// Which dialog is open, and for which restaurant
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Idle,
    Adding,
    Editing(Restaurant),
    ConfirmingDelete(Restaurant),
}

impl DialogState {
    /// The restaurant targeted for edit or delete
    pub fn selected(&self) -> Option<&Restaurant> {
        match self {
            DialogState::Editing(r) | DialogState::ConfirmingDelete(r) => Some(r),
            DialogState::Idle | DialogState::Adding => None,
        }
    }

    /// True while the selection is held for deletion rather than editing
    pub fn is_deleting(&self) -> bool {
        matches!(self, DialogState::ConfirmingDelete(_))
    }

    /// Any dialog (and its backdrop) is showing
    pub fn is_open(&self) -> bool {
        *self != DialogState::Idle
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, DialogState::Adding)
    }

    /// Edit dialog shows for a selection that is not being deleted
    pub fn editing(&self) -> Option<&Restaurant> {
        self.selected().filter(|_| !self.is_deleting())
    }

    pub fn deleting(&self) -> Option<&Restaurant> {
        self.selected().filter(|_| self.is_deleting())
    }
}

/// Inputs to the reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEvent {
    AddClicked,
    EditClicked(Restaurant),
    DeleteClicked(Restaurant),
    /// Cancel or backdrop close on any dialog
    Cancelled,
    /// A mutation succeeded; its dialog closes
    Submitted,
    /// A full snapshot arrived from the backend
    Loaded(Vec<Restaurant>),
    Failed(String),
    ErrorDismissed,
}

/// Restaurant list view state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ListState {
    /// Last full snapshot from the backend
    pub restaurants: Vec<Restaurant>,
    pub dialog: DialogState,
    /// Last failure surfaced to the user
    pub error: Option<String>,
}

impl ListState {
    /// Apply one event. Opening a dialog is only possible from `Idle`.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::AddClicked => self.open(DialogState::Adding),
            ListEvent::EditClicked(r) => self.open(DialogState::Editing(r)),
            ListEvent::DeleteClicked(r) => self.open(DialogState::ConfirmingDelete(r)),
            ListEvent::Cancelled => self.dialog = DialogState::Idle,
            ListEvent::Submitted => {
                self.dialog = DialogState::Idle;
                self.error = None;
            }
            ListEvent::Loaded(restaurants) => {
                self.restaurants = restaurants;
                self.error = None;
            }
            ListEvent::Failed(message) => self.error = Some(message),
            ListEvent::ErrorDismissed => self.error = None,
        }
    }

    /// Error for the page banner; hidden while a dialog covers the page
    pub fn page_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|_| !self.dialog.is_open())
    }

    /// Error shown inside the open dialog
    pub fn dialog_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|_| self.dialog.is_open())
    }

    fn open(&mut self, next: DialogState) {
        if self.dialog == DialogState::Idle {
            self.dialog = next;
        } else {
            log::warn!("[STORE] Ignoring {:?} while {:?}", next, self.dialog);
        }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Send an event through the reducer
pub fn dispatch(store: ListStore, event: ListEvent) {
    store.update(|state| state.apply(event));
}
