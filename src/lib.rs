//! # Coin Peek SDK
//!
//! Client-side price state for a cryptocurrency viewer: BTC, ETH, DOT and
//! friends quoted in USD or EUR, fetched from the CoinDesk data API.
//!
//! ## Usage
//!
//! Controllers own their state and publish immutable snapshots through a
//! `tokio::sync::watch` channel. The presentation layer renders snapshots
//! and forwards user intents.
//!
//! ```no_run
//! use coin_peek_sdk::{CoinDeskProvider, CoinListController, CoinRepository, Currency};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(CoinDeskProvider::from_env()?);
//! let repository = Arc::new(CoinRepository::new(provider));
//!
//! // Starts fetching in USD right away
//! let home = CoinListController::new(repository);
//! home.until_idle().await;
//!
//! home.select_currency(Currency::EUR);
//! home.until_idle().await;
//! let state = home.state();
//! for coin in state.all_coin_details.unwrap_or_default() {
//!     println!("{:?}: {:?}", coin.title, coin.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Controller (aggregate / coin list / single coin)
//!     ↓ refresh(currency)
//! CoinRepository (builds BTC-USD style query keys)
//!     ↓
//! PriceApi (CoinDeskProvider, one GET per call)
//!     ↓ RawPriceResponse
//! mapper → CoinDetails → new state snapshot
//! ```
//!
//! ## Error Handling
//!
//! Fetch failures are `ProviderError` values inside the crate. Controllers
//! log them and collapse them into a `show_error` flag while keeping the
//! last good data.

pub mod constants;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod provider;
pub mod providers;
pub mod reference;
pub mod repository;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use controller::{
    aggregate::AggregateState, coin_list::CoinListState, single_coin::SingleCoinState,
    AggregateController, CoinListController, SingleCoinController,
};
pub use error::ProviderError;
pub use provider::PriceApi;
pub use providers::CoinDeskProvider;
pub use reference::CoinReference;
pub use repository::CoinRepository;
pub use response::{RawPriceRecord, RawPriceResponse};
pub use types::{CoinDetails, Currency, Instrument};
