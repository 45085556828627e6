//! Basic client usage: check the token, list wallets, list transfers.
//!
//! Run with `LAVA_TOKEN=... cargo run --example client`.

use lava_api::{LavaClient, LavaError, TransactionsListRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("LAVA_TOKEN")?;
    let client = LavaClient::new(token)?;

    match client.test_ping().await {
        Ok(data) => println!("ping: {}", data),
        Err(LavaError::Remote { message, code }) => {
            eprintln!("remote rejected the token ({}): {}", code, message);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let wallets = client.wallet_list().await?;
    for wallet in &wallets {
        println!("{}: {} {}", wallet.account, wallet.balance, wallet.currency);
    }

    if let Some(wallet) = wallets.first() {
        let transfers = client
            .transactions_list(
                TransactionsListRequest::new()
                    .with_transfer_type("transfer")
                    .with_account(wallet.account.as_str()),
            )
            .await?;
        println!("{} transfer(s) on {}", transfers.len(), wallet.account);
    }

    Ok(())
}
