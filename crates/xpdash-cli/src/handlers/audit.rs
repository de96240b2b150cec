use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::{summarize_audit, AuditRatio, AuditSummary};

use crate::presentation::cards;
use crate::types::OutputFormat;

pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let transactions = client.audit_transactions().await?;
    let summary = summarize_audit(&transactions);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&as_json(&summary))?)
        }
        OutputFormat::Plain => print!("{}", cards::audit(&summary)),
    }
    Ok(())
}

pub fn as_json(summary: &AuditSummary) -> serde_json::Value {
    let ratio = match summary.rounded_ratio() {
        AuditRatio::Finite(value) => serde_json::json!(value),
        AuditRatio::Infinite => serde_json::json!("inf"),
    };
    serde_json::json!({
        "done": summary.done,
        "received": summary.received,
        "ratio": ratio,
    })
}
