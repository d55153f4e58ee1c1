//! Home screen: every supported instrument in the selected currency

use super::{launch_fetch, StateCell, TaskScope, ViewState};
use crate::{
    constants::DEFAULT_CURRENCY,
    error::ProviderError,
    repository::CoinRepository,
    types::{CoinDetails, Currency},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot published by [`CoinListController`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinListState {
    /// `None` until the first successful fetch; order is not stable
    pub all_coin_details: Option<Vec<CoinDetails>>,
    pub last_updated_timestamp: String,
    pub selected_currency: Option<Currency>,
    pub is_loading: bool,
    pub show_error: bool,
}

impl ViewState for CoinListState {
    fn with_loading(&self, is_loading: bool) -> Self {
        Self {
            is_loading,
            ..self.clone()
        }
    }

    fn with_failure(&self, currency: Currency) -> Self {
        Self {
            show_error: true,
            selected_currency: Some(currency),
            ..self.clone()
        }
    }
}

/// List controller with currency selection
pub struct CoinListController {
    repository: Arc<CoinRepository>,
    state: Arc<StateCell<CoinListState>>,
    scope: TaskScope,
}

impl CoinListController {
    /// Creates the controller and starts the initial fetch in the default
    /// currency. Must be called within a tokio runtime.
    pub fn new(repository: Arc<CoinRepository>) -> Self {
        let controller = Self {
            repository,
            state: Arc::new(StateCell::new(CoinListState::default())),
            scope: TaskScope::default(),
        };
        controller.refresh(DEFAULT_CURRENCY);
        controller
    }

    /// Current snapshot
    pub fn state(&self) -> CoinListState {
        self.state.snapshot()
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<CoinListState> {
        self.state.subscribe()
    }

    /// Fetches all instruments in `currency`
    pub fn refresh(&self, currency: Currency) {
        let repository = self.repository.clone();
        let fetch = async move {
            let details = repository.fetch_all(currency).await?.to_coin_details_list();
            let last_updated = details
                .first()
                .map(|d| d.last_updated_timestamp.clone())
                .ok_or_else(|| ProviderError::invalid_response("no instruments in response"))?;
            Ok::<_, ProviderError>((details, last_updated))
        };

        launch_fetch(
            &self.state,
            &self.scope,
            "coin_list",
            currency,
            fetch,
            move |s: &CoinListState, (details, last_updated)| CoinListState {
                all_coin_details: Some(details),
                last_updated_timestamp: last_updated,
                selected_currency: Some(currency),
                show_error: false,
                ..s.clone()
            },
        );
    }

    /// Currency picker intent
    pub fn select_currency(&self, currency: Currency) {
        self.refresh(currency);
    }

    /// Waits for every in-flight fetch to settle
    pub async fn until_idle(&self) {
        self.scope.join().await;
    }
}
