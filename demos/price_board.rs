use coin_peek_sdk::{
    CoinDeskProvider, CoinListController, CoinRepository, Currency, Instrument,
    SingleCoinController,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Honors COINPEEK_API_URL when set
    let provider = Arc::new(CoinDeskProvider::from_env()?);
    let repository = Arc::new(CoinRepository::new(provider));

    println!("Coin Peek price board (provider: {})", repository.provider_name());
    println!("==========================================");

    let home = CoinListController::new(repository.clone());
    for currency in Currency::all() {
        home.select_currency(*currency);
        home.until_idle().await;

        let state = home.state();
        println!("\n{:-<50}", "");
        if state.show_error {
            println!("Failed to load {} prices", currency);
        }

        let mut coins = state.all_coin_details.unwrap_or_default();
        coins.sort_by(|a, b| a.title.cmp(&b.title));
        for coin in coins {
            println!(
                "{:<10} {:>14} {:<5} (day high {:?}, day low {:?})",
                coin.title.unwrap_or_default(),
                coin.value
                    .map(|v| currency.format_amount(v))
                    .unwrap_or_else(|| "-".to_string()),
                coin.value_flag.unwrap_or_default(),
                coin.day_high,
                coin.day_low,
            );
        }
        println!("Last updated: {}", state.last_updated_timestamp);
    }

    let bitcoin = SingleCoinController::new(repository, "BTC");
    bitcoin.until_idle().await;
    let state = bitcoin.state();

    println!("\n{:-<50}", "");
    let title = Instrument::from_symbol(bitcoin.coin_name())
        .map(|instrument| instrument.name())
        .unwrap_or(bitcoin.coin_name());
    println!("{}", title);
    if let Some(reference) = state.reference {
        println!("{}", reference.description);
        bitcoin.on_link_clicked(reference.url);
        println!("Read more: {}", bitcoin.navigation());
        bitcoin.reset_navigation();
    }
    if let Some(details) = state.coin_details {
        println!(
            "24h change: {:?} ({:?}%)",
            details.daily_change, details.daily_change_percentage
        );
    }

    Ok(())
}
