//! Price API implementations

pub mod coindesk;

pub use coindesk::CoinDeskProvider;
