use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::skill_entries;

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let transactions = client.skill_transactions().await?;
    let skills = skill_entries(&transactions);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&skills)?),
        OutputFormat::Plain => print!("{}", cards::skills(&skills)),
    }
    Ok(())
}
