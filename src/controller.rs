//! Restaurant List Controller
//!
//! The load/add/edit/delete flows as sequential network chains. Each flow
//! reports its outcome as [`ListEvent`]s and always ends a successful
//! mutation with a full reload.

use crate::api::{ApiResult, RestaurantApi};
use crate::models::RestaurantCreateInput;
use crate::store::ListEvent;

#[derive(Debug, Clone)]
pub struct ListController<A> {
    api: A,
}

impl<A: RestaurantApi> ListController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Replace the list with a fresh snapshot.
    pub async fn load(&self, dispatch: &impl Fn(ListEvent)) -> ApiResult<()> {
        let restaurants = report(self.api.get_restaurants().await, dispatch)?;
        log::info!("[LIST] Loaded {} restaurants", restaurants.len());
        dispatch(ListEvent::Loaded(restaurants));
        Ok(())
    }

    /// Create, close the add dialog, reload.
    pub async fn add(
        &self,
        input: RestaurantCreateInput,
        dispatch: &impl Fn(ListEvent),
    ) -> ApiResult<()> {
        let created = report(self.api.add_restaurant(&input).await, dispatch)?;
        log::info!("[LIST] Created restaurant {} ({})", created.id, created.name);
        dispatch(ListEvent::Submitted);
        self.load(dispatch).await
    }

    /// Update the selected restaurant, clear the selection, reload.
    pub async fn update(
        &self,
        id: &str,
        data: RestaurantCreateInput,
        dispatch: &impl Fn(ListEvent),
    ) -> ApiResult<()> {
        report(self.api.update_restaurant(id, &data).await, dispatch)?;
        log::info!("[LIST] Updated restaurant {}", id);
        dispatch(ListEvent::Submitted);
        self.load(dispatch).await
    }

    /// Delete after confirmation, clear the selection, reload.
    pub async fn delete(&self, id: &str, dispatch: &impl Fn(ListEvent)) -> ApiResult<()> {
        report(self.api.delete_restaurant(id).await, dispatch)?;
        log::info!("[LIST] Deleted restaurant {}", id);
        dispatch(ListEvent::Submitted);
        self.load(dispatch).await
    }
}

/// Surface a failure to the store before handing it back.
fn report<T>(result: ApiResult<T>, dispatch: &impl Fn(ListEvent)) -> ApiResult<T> {
    if let Err(e) = &result {
        log::error!("[LIST] {}", e);
        dispatch(ListEvent::Failed(e.to_string()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::Restaurant;
    use crate::store::{DialogState, ListState};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Add(RestaurantCreateInput),
        Update(String, RestaurantCreateInput),
        Delete(String),
    }

    /// In-memory backend that records every call
    #[derive(Default)]
    struct MockApi {
        rows: RefCell<Vec<Restaurant>>,
        calls: RefCell<Vec<Call>>,
        next_id: Cell<u32>,
        fail_mutations: Cell<bool>,
        fail_list: Cell<bool>,
    }

    impl MockApi {
        fn seeded() -> Self {
            let api = MockApi::default();
            *api.rows.borrow_mut() = vec![
                restaurant("1", "Test Restaurant 1", "Italian", "New York"),
                restaurant("2", "Test Restaurant 2", "Japanese", "Los Angeles"),
            ];
            api.next_id.set(3);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_count(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }

        fn check(&self) -> ApiResult<()> {
            if self.fail_mutations.get() {
                Err(ApiError::Status {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl RestaurantApi for MockApi {
        async fn get_restaurants(&self) -> ApiResult<Vec<Restaurant>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(ApiError::Network("offline".to_string()));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn add_restaurant(&self, input: &RestaurantCreateInput) -> ApiResult<Restaurant> {
            self.calls.borrow_mut().push(Call::Add(input.clone()));
            self.check()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let created = Restaurant {
                id: id.to_string(),
                name: input.name.clone(),
                cuisine: input.cuisine.clone(),
                location: input.location.clone(),
            };
            self.rows.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update_restaurant(&self, id: &str, data: &RestaurantCreateInput) -> ApiResult<()> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.to_string(), data.clone()));
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            let row = rows.iter_mut().find(|r| r.id == id).ok_or(ApiError::NotFound)?;
            row.name = data.name.clone();
            row.location = data.location.clone();
            row.cuisine = data.cuisine.clone();
            Ok(())
        }

        async fn delete_restaurant(&self, id: &str) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.check()?;
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    fn restaurant(id: &str, name: &str, cuisine: &str, location: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            location: location.to_string(),
        }
    }

    fn input(name: &str, location: &str, cuisine: &str) -> RestaurantCreateInput {
        RestaurantCreateInput {
            name: name.to_string(),
            location: location.to_string(),
            cuisine: cuisine.to_string(),
        }
    }

    /// Controller plus a plain state driven by its events
    struct Harness {
        controller: ListController<MockApi>,
        state: RefCell<ListState>,
        events: RefCell<Vec<ListEvent>>,
    }

    impl Harness {
        async fn mounted() -> Self {
            let harness = Harness {
                controller: ListController::new(MockApi::seeded()),
                state: RefCell::new(ListState::default()),
                events: RefCell::new(Vec::new()),
            };
            harness.controller.load(&harness.sink()).await.unwrap();
            harness
        }

        fn sink(&self) -> impl Fn(ListEvent) + '_ {
            move |event: ListEvent| {
                self.events.borrow_mut().push(event.clone());
                self.state.borrow_mut().apply(event);
            }
        }

        fn click(&self, event: ListEvent) {
            self.sink()(event);
        }

        fn api(&self) -> &MockApi {
            &self.controller.api
        }

        fn dialog(&self) -> DialogState {
            self.state.borrow().dialog.clone()
        }
    }

    #[tokio::test]
    async fn test_mount_loads_once() {
        let h = Harness::mounted().await;

        assert_eq!(h.api().calls(), vec![Call::List]);
        let state = h.state.borrow();
        assert_eq!(state.restaurants.len(), 2);
        assert_eq!(state.restaurants[0].name, "Test Restaurant 1");
        assert_eq!(state.restaurants[1].cuisine, "Japanese");
    }

    #[tokio::test]
    async fn test_add_creates_then_closes_then_reloads() {
        let h = Harness::mounted().await;
        h.click(ListEvent::AddClicked);
        assert!(h.dialog().is_adding());

        h.controller.add(input("A", "B", "C"), &h.sink()).await.unwrap();

        assert_eq!(
            h.api().calls(),
            vec![Call::List, Call::Add(input("A", "B", "C")), Call::List]
        );
        assert_eq!(h.dialog(), DialogState::Idle);
        // Submitted lands before the reload
        let events = h.events.borrow();
        let submitted = events.iter().position(|e| *e == ListEvent::Submitted).unwrap();
        assert!(matches!(events[submitted + 1], ListEvent::Loaded(_)));
        assert_eq!(h.state.borrow().restaurants.len(), 3);
    }

    #[tokio::test]
    async fn test_update_uses_selected_id_and_clears_selection() {
        let h = Harness::mounted().await;
        let selected = h.state.borrow().restaurants[1].clone();
        h.click(ListEvent::EditClicked(selected.clone()));
        assert_eq!(h.dialog().editing(), Some(&selected));

        let draft = input("Renamed", "Los Angeles", "Japanese");
        h.controller
            .update(&selected.id, draft.clone(), &h.sink())
            .await
            .unwrap();

        assert_eq!(
            h.api().calls(),
            vec![Call::List, Call::Update("2".to_string(), draft), Call::List]
        );
        assert_eq!(h.dialog().selected(), None);
        assert_eq!(h.state.borrow().restaurants[1].name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_waits_for_confirmation() {
        let h = Harness::mounted().await;
        let target = h.state.borrow().restaurants[0].clone();

        h.click(ListEvent::DeleteClicked(target.clone()));
        assert_eq!(h.dialog().deleting(), Some(&target));
        assert_eq!(h.api().calls(), vec![Call::List]);

        h.controller.delete(&target.id, &h.sink()).await.unwrap();

        assert_eq!(
            h.api().calls(),
            vec![Call::List, Call::Delete("1".to_string()), Call::List]
        );
        assert_eq!(h.api().list_count(), 2);
        assert_eq!(h.dialog(), DialogState::Idle);
        assert_eq!(h.state.borrow().restaurants.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_dialog_and_skips_reload() {
        let h = Harness::mounted().await;
        h.api().fail_mutations.set(true);
        h.click(ListEvent::AddClicked);

        let err = h.controller.add(input("A", "B", "C"), &h.sink()).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(h.api().list_count(), 1);
        assert!(h.dialog().is_adding());
        assert_eq!(
            h.state.borrow().error.as_deref(),
            Some("Unexpected status 500: boom")
        );
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_list() {
        let h = Harness::mounted().await;
        h.api().fail_list.set(true);

        let err = h.controller.load(&h.sink()).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(h.api().list_count(), 2);
        let state = h.state.borrow();
        assert_eq!(state.restaurants.len(), 2);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
    }
}
