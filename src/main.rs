use krakenx::{KrakenClient, KrakenConfig, RequestParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Credentials are optional: KRAKEN_API_KEY / KRAKEN_API_SECRET, or a .env file
    #[cfg(feature = "env-file")]
    let config = KrakenConfig::from_env_file("KRAKEN")?;
    #[cfg(not(feature = "env-file"))]
    let config = KrakenConfig::from_env("KRAKEN")?;
    let kraken = KrakenClient::new(config)?;

    println!("Fetching server time...");
    match kraken.get_time().await {
        Ok(time) => println!("Server time: {}", time["result"]),
        Err(e) => println!("Error fetching time: {}", e),
    }

    let params = RequestParams::new().with("pair", "XBTUSD");
    match kraken.get_ticker(Some(&params)).await {
        Ok(ticker) => {
            if let Some(pairs) = ticker["result"].as_object() {
                for (pair, data) in pairs {
                    println!("{}: last trade {}", pair, data["c"][0]);
                }
            }
        }
        Err(e) => println!("Error fetching ticker: {}", e),
    }

    if kraken.has_credentials() {
        match kraken.get_balance().await {
            Ok(balance) => println!("Balance: {}", balance["result"]),
            Err(e) => println!("Error fetching balance: {}", e),
        }
    } else {
        println!("No credentials configured, skipping private endpoints");
    }

    Ok(())
}
