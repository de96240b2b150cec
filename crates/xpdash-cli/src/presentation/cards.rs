//! Plain-text renderings of the aggregates, one card per dashboard section.

use std::fmt::Write;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use xpdash_engine::{AuditRatio, AuditSummary, ProgressHistory, ProjectXp, SkillEntry, XpBucket};
use xpdash_types::UserProfile;

use super::format;

fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn user(profile: Option<&UserProfile>) -> String {
    let mut out = heading("User");
    out.push('\n');
    match profile {
        Some(profile) => {
            let attr = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
            let _ = writeln!(out, "  Login:      {}", profile.login);
            let _ = writeln!(out, "  First name: {}", attr(&profile.attrs.first_name));
            let _ = writeln!(out, "  Last name:  {}", attr(&profile.attrs.last_name));
            let _ = writeln!(out, "  Email:      {}", attr(&profile.attrs.email));
        }
        None => {
            let _ = writeln!(out, "  User information not found.");
        }
    }
    out
}

pub fn audit(summary: &AuditSummary) -> String {
    let ratio = summary.rounded_ratio();
    let flair = match ratio {
        AuditRatio::Finite(value) if value >= 1.5 => " Almost perfect!",
        _ => "",
    };

    let mut out = heading("Audit");
    out.push('\n');
    let _ = writeln!(out, "  Done:     {}", format::mb(summary.done));
    let _ = writeln!(out, "  Received: {}", format::mb(summary.received));
    let _ = writeln!(out, "  Ratio:    {}{}", format::ratio(ratio), flair);
    out
}

pub fn xp(projects: &[ProjectXp]) -> String {
    let mut out = heading("XP by project");
    out.push('\n');
    if projects.is_empty() {
        let _ = writeln!(out, "  No XP recorded.");
        return out;
    }

    for entry in projects {
        let _ = writeln!(
            out,
            "  {:<28} {:>12}",
            entry.project,
            format::kb(entry.amount_bytes)
        );
    }
    let total: u64 = projects.iter().map(|p| p.amount_bytes).sum();
    let _ = writeln!(out, "  {:<28} {:>12}", "Total", format::kb(total));
    out
}

pub fn timeline(buckets: &[XpBucket]) -> String {
    let mut out = heading("XP over time");
    out.push('\n');
    if buckets.is_empty() {
        let _ = writeln!(out, "  No XP data over time to display.");
        return out;
    }

    for bucket in buckets {
        let _ = writeln!(
            out,
            "  {}  {:>12}",
            bucket.date,
            format::kb_value(bucket.amount_kb)
        );
    }
    out
}

pub fn skills(entries: &[SkillEntry]) -> String {
    let mut out = heading("Skills");
    out.push('\n');
    if entries.is_empty() {
        let _ = writeln!(out, "  No relevant skill data to display.");
        return out;
    }

    for entry in entries {
        let _ = writeln!(
            out,
            "  {:<28} {:>8.1}",
            entry.name,
            format::round_up_tenth(entry.amount as f64)
        );
    }
    out
}

pub fn progress(history: &ProgressHistory) -> String {
    let mut out = heading("Progress");
    out.push('\n');
    let Some(item) = history.current() else {
        let _ = writeln!(out, "  No graded progress found.");
        return out;
    };

    // position() is Some whenever current() is.
    let position = history.position().unwrap_or(0);
    let _ = writeln!(out, "  Record:     {} of {}", position + 1, history.len());
    let _ = writeln!(out, "  Path:       {}", item.path);
    let _ = writeln!(
        out,
        "  Created at: {}",
        item.created_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        out,
        "  Updated at: {}",
        item.updated_at.format("%Y-%m-%d %H:%M")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use xpdash_types::ProgressRecord;

    #[test]
    fn audit_card_adds_flair_at_high_ratio() {
        let card = audit(&AuditSummary {
            done: 300_000,
            received: 200_000,
        });
        assert!(card.contains("1.5 Almost perfect!"));
        assert!(card.contains("0.30 MB"));
    }

    #[test]
    fn audit_card_renders_infinite_ratio_without_flair() {
        let card = audit(&AuditSummary {
            done: 500,
            received: 0,
        });
        assert!(card.contains("∞"));
        assert!(!card.contains("Almost perfect"));
    }

    #[test]
    fn empty_cards_degrade_to_messages() {
        assert!(user(None).contains("not found"));
        assert!(xp(&[]).contains("No XP recorded"));
        assert!(progress(&ProgressHistory::default()).contains("No graded progress"));
    }

    #[test]
    fn progress_card_shows_cursor_position() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let history = ProgressHistory::from_records(vec![ProgressRecord {
            path: "/x/graphql".to_string(),
            grade: Some(1.0),
            created_at: at,
            updated_at: at,
        }]);
        let card = progress(&history);
        assert!(card.contains("Record:     1 of 1"));
        assert!(card.contains("/x/graphql"));
    }
}
