// Aggregation core - pure transformations from raw query rows to
// chart-ready series. Sits between wire types (xpdash-types) and CLI
// presentation; no I/O, no error paths, unit conversion only at the edges.

pub mod audit;
pub mod path;
pub mod progress;
pub mod project;
pub mod skills;
pub mod timeline;

pub use audit::{AuditRatio, AuditSummary};
pub use progress::ProgressHistory;
pub use project::ProjectXp;
pub use skills::SkillEntry;
pub use timeline::XpBucket;

use xpdash_types::Transaction;

// Facade API - stable entry points for the CLI layer

/// Sum audit points given/received into a ratio summary.
pub fn summarize_audit(transactions: &[Transaction]) -> AuditSummary {
    audit::summarize(transactions)
}

/// Group XP transactions by extracted project name, largest first.
pub fn xp_by_project(transactions: &[Transaction]) -> Vec<ProjectXp> {
    project::group(transactions)
}

/// Bucket XP transactions per calendar day, oldest first.
pub fn xp_over_time(transactions: &[Transaction]) -> Vec<XpBucket> {
    timeline::bucket(transactions)
}

/// Extract display-ready skill entries from skill-namespace transactions.
pub fn skill_entries(transactions: &[Transaction]) -> Vec<SkillEntry> {
    skills::entries(transactions)
}
