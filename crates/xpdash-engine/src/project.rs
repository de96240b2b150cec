use std::collections::HashMap;

use serde::Serialize;
use xpdash_types::{Transaction, TransactionKind};

use crate::path;

/// XP earned for one project, in raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectXp {
    pub project: String,
    pub amount_bytes: u64,
}

/// Group XP transactions by extracted project name, summing bytes.
///
/// Output is sorted descending by amount with a stable sort, so projects
/// with equal totals keep their first-seen order. Paths under the excluded
/// institution subtrees are dropped before grouping.
pub fn group(transactions: &[Transaction]) -> Vec<ProjectXp> {
    let mut projects: Vec<ProjectXp> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Xp || path::is_excluded(&tx.path) {
            continue;
        }
        let name = path::project_name(&tx.path);
        match index.get(&name) {
            Some(&slot) => projects[slot].amount_bytes += tx.amount,
            None => {
                index.insert(name.clone(), projects.len());
                projects.push(ProjectXp {
                    project: name,
                    amount_bytes: tx.amount,
                });
            }
        }
    }

    projects.sort_by(|a, b| b.amount_bytes.cmp(&a.amount_bytes));
    projects
}
