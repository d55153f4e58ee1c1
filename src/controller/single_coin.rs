//! Single-coin detail screen

use super::{launch_fetch, StateCell, TaskScope, ViewState};
use crate::{
    constants::DEFAULT_CURRENCY,
    error::ProviderError,
    reference::{coin_reference, CoinReference},
    repository::CoinRepository,
    types::{CoinDetails, Currency, Instrument},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot published by [`SingleCoinController`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleCoinState {
    pub coin_details: Option<CoinDetails>,
    pub selected_currency: Option<Currency>,
    /// `None` when the coin name is not a supported instrument
    pub reference: Option<CoinReference>,
    /// Link the presentation layer should open; empty when nothing is pending
    pub navigation_url: String,
    pub is_loading: bool,
    pub show_error: bool,
}

impl ViewState for SingleCoinState {
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

/// Controller bound to one coin for its whole lifetime
pub struct SingleCoinController {
    coin_name: String,
    repository: Arc<CoinRepository>,
    state: Arc<StateCell<SingleCoinState>>,
    scope: TaskScope,
}

impl SingleCoinController {
    /// Creates the controller for `coin_name` (an instrument symbol such as
    /// `BTC`), resolves its reference and starts the initial fetch in the
    /// default currency. Must be called within a tokio runtime.
    pub fn new(repository: Arc<CoinRepository>, coin_name: impl Into<String>) -> Self {
        let coin_name = coin_name.into();
        let reference = coin_reference(&coin_name);

        let controller = Self {
            coin_name,
            repository,
            state: Arc::new(StateCell::new(SingleCoinState {
                reference,
                ..SingleCoinState::default()
            })),
            scope: TaskScope::default(),
        };
        controller.refresh(DEFAULT_CURRENCY);
        controller
    }

    /// Name the controller was created for
    pub fn coin_name(&self) -> &str {
        &self.coin_name
    }

    pub fn state(&self) -> SingleCoinState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SingleCoinState> {
        self.state.subscribe()
    }

    /// Fetches the bound coin in `currency`
    ///
    /// A coin name that is not a supported instrument fails without a request.
    pub fn refresh(&self, currency: Currency) {
        let repository = self.repository.clone();
        let instrument = Instrument::from_symbol(&self.coin_name);
        let coin_name = self.coin_name.clone();

        let fetch = async move {
            let instrument =
                instrument.ok_or_else(|| ProviderError::unsupported_asset(&coin_name))?;
            let response = repository.fetch_one(instrument, currency).await?;
            response
                .data
                .values()
                .next()
                .map(|record| record.to_coin_details())
                .ok_or_else(|| {
                    ProviderError::invalid_response(format!("no data for {}", coin_name))
                })
        };

        launch_fetch(
            &self.state,
            &self.scope,
            "single_coin",
            currency,
            fetch,
            move |s: &SingleCoinState, details: CoinDetails| SingleCoinState {
                coin_details: Some(details),
                selected_currency: Some(currency),
                show_error: false,
                ..s.clone()
            },
        );
    }

    pub fn select_currency(&self, currency: Currency) {
        self.refresh(currency);
    }

    /// Records `url` as the pending navigation, replacing any earlier one
    pub fn on_link_clicked(&self, url: &str) {
        self.state.update(|s| SingleCoinState {
            navigation_url: url.to_string(),
            ..s.clone()
        });
    }

    /// Clears the pending navigation once the presentation layer consumed it
    pub fn reset_navigation(&self) {
        self.state.update(|s| SingleCoinState {
            navigation_url: String::new(),
            ..s.clone()
        });
    }

    /// Pending navigation link, empty if none
    pub fn navigation(&self) -> String {
        self.state.snapshot().navigation_url
    }

    pub async fn until_idle(&self) {
        self.scope.join().await;
    }
}
