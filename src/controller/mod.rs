//! View-state controllers
//!
//! Each controller owns one immutable state snapshot held in a
//! [`tokio::sync::watch`] channel. Every transition replaces the whole
//! snapshot, so a subscriber never observes a half-applied update.
//!
//! ## Fetch cycle
//!
//! ```text
//! refresh(currency)
//!     ↓ publish is_loading = true
//! spawned task ── repository call ──┐
//!     ↓ Ok                          ↓ Err
//! publish data, show_error = false  publish show_error = true
//!     ↓                             ↓
//!     └──── publish is_loading = false ────┘
//! ```
//!
//! Fetches on the same controller are not serialized: the snapshot after
//! two overlapping requests is whatever the last task to finish wrote.
//! Dropping a controller aborts its outstanding tasks.

pub mod aggregate;
pub mod coin_list;
pub mod single_coin;

pub use aggregate::AggregateController;
pub use coin_list::CoinListController;
pub use single_coin::SingleCoinController;

use crate::{error::ProviderError, types::Currency};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Transitions shared by every controller state
pub(crate) trait ViewState: Clone + Send + Sync + 'static {
    /// Copy with the loading flag set
    fn with_loading(&self, is_loading: bool) -> Self;

    /// Copy flagged as failed for a request in `currency`, data untouched
    fn with_failure(&self, currency: Currency) -> Self;
}

/// Single-writer snapshot holder
pub(crate) struct StateCell<S> {
    tx: watch::Sender<S>,
}

impl<S: Clone> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replaces the snapshot with one derived from the current value
    pub(crate) fn update(&self, f: impl FnOnce(&S) -> S) {
        self.tx.send_modify(|state| *state = f(state));
    }

    pub(crate) fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}

/// Tasks bound to a controller's lifetime
///
/// Abort handles stay in the scope until it is dropped, so waiting on the
/// scope never gives up the ability to cancel. Waiting goes through a shared
/// in-flight counter, which any number of callers can watch at once.
pub(crate) struct TaskScope {
    handles: Mutex<Vec<AbortHandle>>,
    in_flight: Arc<watch::Sender<usize>>,
}

/// Decrements the in-flight counter when its task finishes or is aborted
struct InFlight(Arc<watch::Sender<usize>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.send_modify(|count| *count = count.saturating_sub(1));
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        let (in_flight, _rx) = watch::channel(0);
        Self {
            handles: Mutex::new(Vec::new()),
            in_flight: Arc::new(in_flight),
        }
    }
}

impl TaskScope {
    fn handles(&self) -> MutexGuard<'_, Vec<AbortHandle>> {
        self.handles.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn launch<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.in_flight.send_modify(|count| *count += 1);
        let guard = InFlight(self.in_flight.clone());

        let handle = tokio::spawn(async move {
            let _guard = guard;
            task.await;
        });

        let mut handles = self.handles();
        handles.retain(|handle| !handle.is_finished());
        handles.push(handle.abort_handle());
    }

    /// Waits until no launched task is running, including ones launched
    /// meanwhile. Cancel-safe.
    pub(crate) async fn join(&self) {
        let mut in_flight = self.in_flight.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = in_flight.wait_for(|count| *count == 0).await;
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        for handle in self.handles().drain(..) {
            handle.abort();
        }
    }
}

/// Runs one fetch cycle on `state`
///
/// Publishes the loading snapshot immediately, then resolves `fetch` on the
/// task scope and applies either `on_success` or the failure transition
/// before clearing the loading flag.
pub(crate) fn launch_fetch<S, T, Fut, F>(
    state: &Arc<StateCell<S>>,
    scope: &TaskScope,
    controller: &'static str,
    currency: Currency,
    fetch: Fut,
    on_success: F,
) where
    S: ViewState,
    T: Send + 'static,
    Fut: Future<Output = Result<T, ProviderError>> + Send + 'static,
    F: FnOnce(&S, T) -> S + Send + 'static,
{
    state.update(|s| s.with_loading(true));
    tracing::debug!(controller, currency = %currency, "Fetching prices");

    let state = state.clone();
    scope.launch(async move {
        match fetch.await {
            Ok(data) => state.update(|s| on_success(s, data)),
            Err(e) => {
                tracing::warn!(controller, currency = %currency, error = %e, "Failed to fetch prices");
                state.update(|s| s.with_failure(currency));
            }
        }
        state.update(|s| s.with_loading(false));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestState {
        loading: bool,
        failed: Option<Currency>,
        value: u32,
    }

    impl ViewState for TestState {
        fn with_loading(&self, is_loading: bool) -> Self {
            Self {
                loading: is_loading,
                ..self.clone()
            }
        }

        fn with_failure(&self, currency: Currency) -> Self {
            Self {
                failed: Some(currency),
                ..self.clone()
            }
        }
    }

    #[tokio::test]
    async fn test_cycle_publishes_loading_then_result() {
        let state = Arc::new(StateCell::new(TestState::default()));
        let scope = TaskScope::default();

        launch_fetch(&state, &scope, "test", Currency::USD, async { Ok(7u32) }, |s, v| {
            TestState { value: v, ..s.clone() }
        });
        assert!(state.snapshot().loading);

        scope.join().await;
        assert_eq!(
            state.snapshot(),
            TestState {
                loading: false,
                failed: None,
                value: 7
            }
        );
    }

    #[tokio::test]
    async fn test_cycle_failure_keeps_value() {
        let state = Arc::new(StateCell::new(TestState {
            value: 3,
            ..TestState::default()
        }));
        let scope = TaskScope::default();

        launch_fetch(
            &state,
            &scope,
            "test",
            Currency::EUR,
            async { Err::<u32, _>(ProviderError::Timeout) },
            |s, v| TestState { value: v, ..s.clone() },
        );
        scope.join().await;

        let snapshot = state.snapshot();
        assert_eq!(snapshot.value, 3);
        assert_eq!(snapshot.failed, Some(Currency::EUR));
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn test_concurrent_joins_both_wait() {
        let state = Arc::new(StateCell::new(TestState::default()));
        let scope = TaskScope::default();

        let task_state = state.clone();
        scope.launch(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            task_state.update(|s| TestState { value: 1, ..s.clone() });
        });

        let (_, second) = tokio::join!(scope.join(), async {
            tokio::task::yield_now().await;
            scope.join().await;
            state.snapshot().value
        });
        assert_eq!(second, 1);
    }

    #[tokio::test]
    async fn test_timed_out_join_keeps_abort() {
        let state = Arc::new(StateCell::new(TestState::default()));
        let mut rx = state.subscribe();
        let scope = TaskScope::default();

        let task_state = state.clone();
        scope.launch(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            task_state.update(|s| TestState { value: 1, ..s.clone() });
        });

        let waited = tokio::time::timeout(Duration::from_millis(50), scope.join()).await;
        assert!(waited.is_err());
        drop(scope);
        drop(state);

        let changed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(matches!(changed, Ok(Err(_))), "aborted task must not publish");
        assert_eq!(rx.borrow().value, 0);
    }

    #[tokio::test]
    async fn test_dropping_scope_aborts_tasks() {
        let state = Arc::new(StateCell::new(TestState::default()));
        let mut rx = state.subscribe();
        let scope = TaskScope::default();

        let task_state = state.clone();
        scope.launch(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            task_state.update(|s| TestState { value: 1, ..s.clone() });
        });
        drop(scope);
        drop(state);

        let changed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(matches!(changed, Ok(Err(_))), "sender should close without publishing");
    }
}
