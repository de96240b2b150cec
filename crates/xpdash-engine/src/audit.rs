use serde::Serialize;
use xpdash_types::{Transaction, TransactionKind};

/// Audit points given (`done`) versus received, in raw bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub done: u64,
    pub received: u64,
}

/// Audit ratio with a typed sentinel: points given with nothing received
/// has no finite ratio. Rendering the sentinel is a presentation decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuditRatio {
    Finite(f64),
    Infinite,
}

impl AuditSummary {
    pub fn ratio(&self) -> AuditRatio {
        if self.received > 0 {
            AuditRatio::Finite(self.done as f64 / self.received as f64)
        } else if self.done > 0 {
            AuditRatio::Infinite
        } else {
            AuditRatio::Finite(0.0)
        }
    }

    /// Ratio rounded to one decimal place, half rounded up.
    pub fn rounded_ratio(&self) -> AuditRatio {
        match self.ratio() {
            AuditRatio::Finite(ratio) => AuditRatio::Finite((ratio * 10.0).round() / 10.0),
            AuditRatio::Infinite => AuditRatio::Infinite,
        }
    }
}

/// Sum `up` amounts into `done` and `down` amounts into `received`.
/// Other kinds are ignored, so callers may pass pre-filtered or mixed rows.
pub fn summarize(transactions: &[Transaction]) -> AuditSummary {
    let mut summary = AuditSummary::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Up => summary.done += tx.amount,
            TransactionKind::Down => summary.received += tx.amount,
            _ => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(kind: TransactionKind, amount: u64) -> Transaction {
        Transaction {
            kind,
            amount,
            path: "/bahrain/bh-module/div-01/graphql".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            user_login: None,
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary, AuditSummary::default());
        assert_eq!(summary.ratio(), AuditRatio::Finite(0.0));
    }

    #[test]
    fn sums_by_kind_and_preserves_total() {
        let rows = vec![
            tx(TransactionKind::Up, 100),
            tx(TransactionKind::Down, 40),
            tx(TransactionKind::Up, 50),
            tx(TransactionKind::Down, 60),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.done, 150);
        assert_eq!(summary.received, 100);
        assert_eq!(
            summary.done + summary.received,
            rows.iter().map(|t| t.amount).sum::<u64>()
        );
    }

    #[test]
    fn summary_is_order_independent() {
        let forward = vec![
            tx(TransactionKind::Up, 10),
            tx(TransactionKind::Down, 20),
            tx(TransactionKind::Up, 30),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(summarize(&forward), summarize(&reversed));
    }

    #[test]
    fn ignores_unrelated_kinds() {
        let rows = vec![
            tx(TransactionKind::Up, 100),
            tx(TransactionKind::Xp, 9999),
            tx(TransactionKind::Skill("go".to_string()), 50),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.done, 100);
        assert_eq!(summary.received, 0);
    }

    #[test]
    fn ratio_sentinels() {
        assert_eq!(
            AuditSummary { done: 0, received: 0 }.ratio(),
            AuditRatio::Finite(0.0)
        );
        assert_eq!(
            AuditSummary { done: 500, received: 0 }.ratio(),
            AuditRatio::Infinite
        );
    }

    #[test]
    fn rounded_ratio_is_one_decimal_half_up() {
        let summary = AuditSummary {
            done: 150,
            received: 100,
        };
        assert_eq!(summary.rounded_ratio(), AuditRatio::Finite(1.5));

        // 1.25 rounds up to 1.3, not down to 1.2
        let summary = AuditSummary {
            done: 125,
            received: 100,
        };
        assert_eq!(summary.rounded_ratio(), AuditRatio::Finite(1.3));
    }
}
