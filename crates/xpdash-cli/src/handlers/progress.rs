use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::ProgressHistory;

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, step: usize, format: OutputFormat) -> Result<()> {
    let records = client.progress_records().await?;
    let mut history = ProgressHistory::from_records(records);

    // Clamped walk: stepping past the oldest record stops there.
    for _ in 0..step {
        if !history.advance() {
            break;
        }
    }

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "total": history.len(),
                "position": history.position(),
                "current": history.current(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => print!("{}", cards::progress(&history)),
    }
    Ok(())
}
