use crate::api::ApiError;
use futures::future::LocalBoxFuture;
use leptos::*;
use std::{cell::Cell, rc::Rc};

pub const ALL_CATEGORIES: &str = "ALL";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T: Clone> ListState<T> {
    pub fn items(&self) -> Vec<T> {
        match self {
            ListState::Ready(items) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            ListState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

/// What a list body should render. Only changes when the body has to swap views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Failed(String),
    Empty,
    Populated,
}

pub fn list_phase<T>(state: &ListState<T>, visible: usize) -> ListPhase {
    match state {
        ListState::Loading => ListPhase::Loading,
        ListState::Failed(message) => ListPhase::Failed(message.clone()),
        ListState::Ready(_) if visible == 0 => ListPhase::Empty,
        ListState::Ready(_) => ListPhase::Populated,
    }
}

/// Drops responses that arrive after a newer fetch started or after the owner unmounted.
#[derive(Clone, Default)]
pub struct FetchGuard {
    generation: Rc<Cell<u64>>,
    released: Rc<Cell<bool>>,
}

impl FetchGuard {
    pub fn begin(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn accepts(&self, ticket: u64) -> bool {
        !self.released.get() && self.generation.get() == ticket
    }

    pub fn release(&self) {
        self.released.set(true);
    }
}

/// Entities that can be narrowed by the list search box and category filter.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;

    fn category(&self) -> Option<String> {
        None
    }
}

pub fn matches_entity<T: Searchable>(item: &T, search: &str, category: &str) -> bool {
    let needle = search.trim().to_lowercase();
    let text_match = needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
    let category = category.trim();
    let category_match = category.is_empty()
        || category.eq_ignore_ascii_case(ALL_CATEGORIES)
        || item
            .category()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(category));
    text_match && category_match
}

pub fn filter_entities<T: Searchable + Clone>(items: &[T], search: &str, category: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_entity(*item, search, category))
        .cloned()
        .collect()
}

pub type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Vec<T>, ApiError>>>;

/// Applies a finished fetch unless the guard has moved on.
pub fn apply_fetch_result<T>(
    state: RwSignal<ListState<T>>,
    guard: &FetchGuard,
    ticket: u64,
    result: Result<Vec<T>, ApiError>,
) -> bool {
    if !guard.accepts(ticket) {
        return false;
    }
    match result {
        Ok(items) => state.set(ListState::Ready(items)),
        Err(err) => {
            log::warn!("list fetch failed: {} ({})", err.error, err.code);
            state.set(ListState::Failed(err.error));
        }
    }
    true
}

pub struct CollectionViewModel<T: 'static> {
    pub state: RwSignal<ListState<T>>,
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub filtered: Memo<Vec<T>>,
    pub phase: Memo<ListPhase>,
    fetcher: StoredValue<Fetcher<T>>,
    guard: StoredValue<FetchGuard>,
}

impl<T> Clone for CollectionViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CollectionViewModel<T> {}

impl<T> CollectionViewModel<T>
where
    T: Searchable + Clone + PartialEq + 'static,
{
    /// Builds the model and schedules the first fetch for when the owner mounts.
    pub fn new(fetcher: Fetcher<T>) -> Self {
        let state = create_rw_signal(ListState::<T>::Loading);
        let search = create_rw_signal(String::new());
        let category = create_rw_signal(ALL_CATEGORIES.to_string());
        let filtered = create_memo(move |_| {
            state.with(|current| match current {
                ListState::Ready(items) => {
                    filter_entities(items, &search.get(), &category.get())
                }
                _ => Vec::new(),
            })
        });
        let phase = create_memo(move |_| {
            state.with(|current| list_phase(current, filtered.with(Vec::len)))
        });
        let guard = FetchGuard::default();
        let cleanup_guard = guard.clone();
        on_cleanup(move || cleanup_guard.release());

        let vm = Self {
            state,
            search,
            category,
            filtered,
            phase,
            fetcher: store_value(fetcher),
            guard: store_value(guard),
        };
        create_effect(move |_| vm.refresh());
        vm
    }

    /// Re-fetches the whole collection. Only the latest request's answer is applied.
    ///
    /// Items already on screen stay rendered until the answer lands, so cards and the
    /// modals they own survive a refresh.
    pub fn refresh(&self) {
        let ticket = self.guard.with_value(FetchGuard::begin);
        let guard = self.guard.get_value();
        let request = self.fetcher.with_value(|fetch| fetch());
        let state = self.state;
        if !state.with_untracked(|s| matches!(s, ListState::Ready(_))) {
            state.set(ListState::Loading);
        }
        spawn_local(async move {
            let result = request.await;
            apply_fetch_result(state, &guard, ticket, result);
        });
    }

    pub fn on_changed(&self) -> Callback<()> {
        let vm = *self;
        Callback::new(move |_| vm.refresh())
    }

    pub fn raw_count(&self) -> usize {
        self.state.with(|s| match s {
            ListState::Ready(items) => items.len(),
            _ => 0,
        })
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use futures::FutureExt;

    #[test]
    fn stale_responses_are_discarded() {
        with_runtime(|| {
            let state = create_rw_signal(ListState::<u32>::Loading);
            let guard = FetchGuard::default();
            let stale = guard.begin();
            let latest = guard.begin();

            assert!(apply_fetch_result(state, &guard, latest, Ok(vec![2])));
            assert!(!apply_fetch_result(state, &guard, stale, Ok(vec![1])));
            assert_eq!(state.get_untracked(), ListState::Ready(vec![2]));
        });
    }

    #[test]
    fn failures_store_message_and_empty_items() {
        with_runtime(|| {
            let state = create_rw_signal(ListState::<u32>::Ready(vec![1]));
            let guard = FetchGuard::default();
            let ticket = guard.begin();
            apply_fetch_result(
                state,
                &guard,
                ticket,
                Err(ApiError::request_failed("Network down")),
            );
            let current = state.get_untracked();
            assert_eq!(current.error().as_deref(), Some("Network down"));
            assert!(current.items().is_empty());
        });
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    fn pending_fetcher(calls: Rc<Cell<u32>>) -> Fetcher<Row> {
        Rc::new(move || {
            calls.set(calls.get() + 1);
            futures::future::pending().boxed_local()
        })
    }

    // refresh() spawns onto the current LocalSet on the host.
    async fn on_local_set(f: impl FnOnce() + 'static) {
        tokio::task::LocalSet::new()
            .run_until(async move { with_runtime(f) })
            .await;
    }

    #[tokio::test]
    async fn refresh_keeps_ready_items_while_refetching() {
        on_local_set(|| {
            let calls = Rc::new(Cell::new(0));
            let vm = CollectionViewModel::new(pending_fetcher(calls.clone()));
            vm.state.set(ListState::Ready(vec![Row(1), Row(2)]));
            assert_eq!(vm.phase.get_untracked(), ListPhase::Populated);

            vm.refresh();

            assert_eq!(calls.get(), 1);
            assert_eq!(vm.state.get_untracked(), ListState::Ready(vec![Row(1), Row(2)]));
            assert_eq!(vm.phase.get_untracked(), ListPhase::Populated);
        })
        .await;
    }

    #[tokio::test]
    async fn refresh_after_failure_shows_loading_again() {
        on_local_set(|| {
            let vm = CollectionViewModel::new(pending_fetcher(Rc::new(Cell::new(0))));
            vm.state.set(ListState::Failed("down".into()));
            vm.refresh();
            assert!(vm.state.get_untracked().is_loading());
            assert_eq!(vm.phase.get_untracked(), ListPhase::Loading);
        })
        .await;
    }

    #[test]
    fn released_guard_ignores_responses_after_unmount() {
        with_runtime(|| {
            let state = create_rw_signal(ListState::<u32>::Loading);
            let guard = FetchGuard::default();
            let ticket = guard.begin();
            guard.release();
            assert!(!apply_fetch_result(state, &guard, ticket, Ok(vec![1])));
            assert!(state.get_untracked().is_loading());
        });
    }
}
