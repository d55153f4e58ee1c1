//! Fixed three-coin overview (Bitcoin, Ethereum, Polkadot)

use super::{launch_fetch, StateCell, TaskScope, ViewState};
use crate::{
    constants::{AGGREGATE_INSTRUMENTS, DEFAULT_CURRENCY},
    repository::CoinRepository,
    response::RawPriceResponse,
    types::{CoinDetails, Currency, Instrument},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot published by [`AggregateController`]
///
/// A coin missing from an otherwise successful response is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateState {
    pub bitcoin_details: Option<CoinDetails>,
    pub ethereum_details: Option<CoinDetails>,
    pub polkadot_details: Option<CoinDetails>,
    pub selected_currency: Option<Currency>,
    pub is_loading: bool,
    pub show_error: bool,
}

impl ViewState for AggregateState {
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

/// Controller for the BTC/ETH/DOT overview
pub struct AggregateController {
    repository: Arc<CoinRepository>,
    state: Arc<StateCell<AggregateState>>,
    scope: TaskScope,
}

impl AggregateController {
    /// Creates the controller and starts the initial fetch in the default
    /// currency. Must be called within a tokio runtime.
    pub fn new(repository: Arc<CoinRepository>) -> Self {
        let controller = Self {
            repository,
            state: Arc::new(StateCell::new(AggregateState::default())),
            scope: TaskScope::default(),
        };
        controller.refresh(DEFAULT_CURRENCY);
        controller
    }

    pub fn state(&self) -> AggregateState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<AggregateState> {
        self.state.subscribe()
    }

    /// Fetches the three coins in `currency`
    pub fn refresh(&self, currency: Currency) {
        let repository = self.repository.clone();
        let fetch = async move {
            repository
                .fetch_instruments(AGGREGATE_INSTRUMENTS, currency)
                .await
        };

        launch_fetch(
            &self.state,
            &self.scope,
            "aggregate",
            currency,
            fetch,
            move |s: &AggregateState, response: RawPriceResponse| {
                let details = |instrument: Instrument| {
                    response
                        .data
                        .get(&instrument.query_key(currency))
                        .map(|record| record.to_coin_details())
                };
                AggregateState {
                    bitcoin_details: details(Instrument::BTC),
                    ethereum_details: details(Instrument::ETH),
                    polkadot_details: details(Instrument::DOT),
                    selected_currency: Some(currency),
                    show_error: false,
                    ..s.clone()
                }
            },
        );
    }

    pub fn select_currency(&self, currency: Currency) {
        self.refresh(currency);
    }

    pub async fn until_idle(&self) {
        self.scope.join().await;
    }
}
