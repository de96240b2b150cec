use anyhow::Result;
use xpdash_client::Client;

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let profile = client.user_profile().await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Plain => print!("{}", cards::user(profile.as_ref())),
    }
    Ok(())
}
