use std::collections::HashSet;

use serde::Serialize;
use xpdash_types::Transaction;

/// One skill bar: the namespaced type with the `skill_` prefix stripped,
/// amount passed through in its raw unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    #[serde(rename = "type")]
    pub name: String,
    pub amount: u64,
}

/// Name fragments that mark grading noise rather than skills.
const EXCLUDED_FRAGMENTS: [&str; 4] = ["quest", "checkpoint", "piscine-js", "div-"];

/// Extract display-ready skill entries.
///
/// The query already de-duplicates per type with the highest amount first,
/// so the first row seen for a name is authoritative and later duplicates
/// are skipped.
pub fn entries(transactions: &[Transaction]) -> Vec<SkillEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for tx in transactions {
        let Some(name) = tx.kind.skill_name() else {
            continue;
        };
        if !seen.insert(name) {
            continue;
        }
        let lowered = name.to_lowercase();
        if EXCLUDED_FRAGMENTS.iter().any(|f| lowered.contains(f)) {
            continue;
        }
        out.push(SkillEntry {
            name: name.to_string(),
            amount: tx.amount,
        });
    }

    out
}
