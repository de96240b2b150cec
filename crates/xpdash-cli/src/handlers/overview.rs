use anyhow::Result;
use xpdash_client::Client;
use xpdash_engine::{skill_entries, summarize_audit, xp_by_project, xp_over_time, ProgressHistory};

use crate::handlers::audit;
use crate::presentation::cards;
use crate::types::OutputFormat;

/// The full dashboard load. Each aggregator depends only on its own query
/// result, so the five fetches run concurrently.
pub async fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let (profile, audit_rows, xp_rows, skill_rows, progress_rows) = tokio::try_join!(
        client.user_profile(),
        client.audit_transactions(),
        client.xp_transactions(),
        client.skill_transactions(),
        client.progress_records(),
    )?;

    let summary = summarize_audit(&audit_rows);
    let projects = xp_by_project(&xp_rows);
    let buckets = xp_over_time(&xp_rows);
    let skills = skill_entries(&skill_rows);
    let history = ProgressHistory::from_records(progress_rows);

    if format == OutputFormat::Json {
        let value = serde_json::json!({
            "user": profile,
            "audit": audit::as_json(&summary),
            "xp_by_project": projects,
            "xp_over_time": buckets,
            "skills": skills,
            "progress": {
                "total": history.len(),
                "current": history.current(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", cards::user(profile.as_ref()));
    println!();
    print!("{}", cards::audit(&summary));
    println!();
    print!("{}", cards::xp(&projects));
    println!();
    print!("{}", cards::timeline(&buckets));
    println!();
    print!("{}", cards::skills(&skills));
    println!();
    print!("{}", cards::progress(&history));
    Ok(())
}
