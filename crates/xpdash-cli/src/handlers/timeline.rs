use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::xp_over_time;

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let transactions = client.xp_transactions().await?;
    let buckets = xp_over_time(&transactions);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&buckets)?),
        OutputFormat::Plain => print!("{}", cards::timeline(&buckets)),
    }
    Ok(())
}
