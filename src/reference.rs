//! Static description and link for each supported coin

use serde::Serialize;

/// Description text and reference URL shown on the single-coin screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinReference {
    pub description: &'static str,
    pub url: &'static str,
}

/// Looks up the reference for a coin by its exact instrument symbol
///
/// Returns `None` for names that are not supported instruments.
pub fn coin_reference(coin_name: &str) -> Option<CoinReference> {
    let (description, url) = match coin_name {
        "BTC" => (
            "Bitcoin is the first decentralized cryptocurrency, a peer-to-peer electronic cash system with a fixed supply of 21 million coins.",
            "https://bitcoin.org",
        ),
        "ETH" => (
            "Ethereum is a programmable blockchain whose native asset, ether, pays for smart contract execution.",
            "https://ethereum.org",
        ),
        "DOT" => (
            "Polkadot connects specialized blockchains into one network secured by a shared relay chain.",
            "https://polkadot.com",
        ),
        "XRP" => (
            "XRP is the native asset of the XRP Ledger, built for fast and low-cost cross-border payments.",
            "https://xrpl.org",
        ),
        "USDT" => (
            "Tether is a stablecoin designed to hold a one-to-one value with the US dollar.",
            "https://tether.to",
        ),
        "BNB" => (
            "BNB fuels the BNB Chain ecosystem, paying for transaction fees and on-chain services.",
            "https://www.bnbchain.org",
        ),
        "DOGE" => (
            "Dogecoin started as a joke in 2013 and became a widely used community-driven cryptocurrency.",
            "https://dogecoin.com",
        ),
        _ => return None,
    };

    Some(CoinReference { description, url })
}
