//! Remote collection store.
//!
//! One store per entity type wraps the `fetch -> loading/error/data`
//! lifecycle that every list screen and picker shares. The store owns the
//! in-memory collection and a status flag; [`CollectionStore::refresh`] is
//! its only operation. Mutations (create/update/delete) are issued by the
//! screens themselves and must be followed by an explicit `refresh()` —
//! the store never infers that a write happened.

use crate::shared::api::{self, ApiError};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Store lifecycle status.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// The pure state machine behind a store.
///
/// `items` always reflects the last successful fetch exactly: a refresh is a
/// total replace, and a failed refresh leaves `items` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub status: FetchStatus,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Idle,
        }
    }
}

impl<T> CollectionState<T> {
    /// A refresh has been started.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// A refresh has resolved.
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Idle;
            }
            Err(e) => self.status = FetchStatus::Error(e.to_string()),
        }
    }
}

/// Reactive handle to one entity collection, fixed to its list endpoint.
///
/// The handle is `Copy`; clones observe the same state. Calling `refresh()`
/// while a request is already in flight simply issues a second request and
/// the state reflects whichever response resolves last (last-write-wins,
/// no de-duplication or cancellation). A request that never resolves leaves
/// the store `Loading` — there is no timeout.
pub struct CollectionStore<T: 'static> {
    endpoint: &'static str,
    state: RwSignal<CollectionState<T>>,
}

impl<T: 'static> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CollectionStore<T> {}

impl<T> CollectionStore<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    /// Create an empty/idle store bound to a list endpoint like `/products`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            state: RwSignal::new(CollectionState::default()),
        }
    }

    /// Fetch the full collection and atomically replace local state.
    pub fn refresh(self) {
        self.state.update(|s| s.begin());
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::get_json::<Vec<T>>(self.endpoint).await;
            self.state.update(|s| s.apply(result));
        });
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status == FetchStatus::Loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| match &s.status {
                FetchStatus::Error(message) => Some(message.clone()),
                _ => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn successful_refresh_replaces_items_and_goes_idle() {
        let mut state = CollectionState::<Item>::default();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.items.is_empty());

        state.begin();
        assert_eq!(state.status, FetchStatus::Loading);

        let body: Vec<Item> = serde_json::from_str(r#"[{"id":1,"name":"A"}]"#).unwrap();
        state.apply(Ok(body));
        assert_eq!(state.items, vec![item(1, "A")]);
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn failed_refresh_keeps_items_and_reports_error() {
        let mut state = CollectionState::default();
        state.apply(Ok(vec![item(1, "A"), item(2, "B")]));
        let before = state.items.clone();

        state.begin();
        state.apply(Err(ApiError::server(500, r#"{"message":"down"}"#)));

        assert_eq!(state.items, before);
        assert_eq!(state.status, FetchStatus::Error("down".into()));
    }

    #[test]
    fn refresh_is_a_total_replace() {
        let mut state = CollectionState::default();
        state.apply(Ok(vec![item(1, "A"), item(2, "B")]));
        state.apply(Ok(vec![item(3, "C")]));
        assert_eq!(state.items, vec![item(3, "C")]);
    }

    #[test]
    fn refresh_is_idempotent_for_unchanged_collection() {
        let mut state = CollectionState::default();
        state.apply(Ok(vec![item(1, "A")]));
        let first = state.items.clone();
        state.begin();
        state.apply(Ok(vec![item(1, "A")]));
        assert_eq!(state.items, first);
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn success_clears_a_previous_error() {
        let mut state = CollectionState::default();
        state.apply(Err(ApiError::Network("offline".into())));
        assert!(matches!(state.status, FetchStatus::Error(_)));

        state.apply(Ok(vec![item(1, "A")]));
        assert_eq!(state.status, FetchStatus::Idle);
    }
}
