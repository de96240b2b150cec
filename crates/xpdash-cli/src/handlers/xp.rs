use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::xp_by_project;

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let transactions = client.xp_transactions().await?;
    let projects = xp_by_project(&transactions);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
        OutputFormat::Plain => print!("{}", cards::xp(&projects)),
    }
    Ok(())
}
