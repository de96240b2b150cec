use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use xpdash_types::{Transaction, TransactionKind};

/// XP earned on one calendar day, in kilobytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XpBucket {
    pub date: NaiveDate,
    pub amount_kb: f64,
}

/// Sum XP per calendar day, oldest first. Amounts accumulate in bytes and
/// are divided to kilobytes once at the end, never per row.
pub fn bucket(transactions: &[Transaction]) -> Vec<XpBucket> {
    let mut bytes_by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for tx in transactions {
        if tx.kind != TransactionKind::Xp {
            continue;
        }
        // Day boundaries are UTC: timestamps carrying an offset are
        // converted before truncation, not truncated in their own zone.
        *bytes_by_date.entry(tx.created_at.date_naive()).or_insert(0) += tx.amount;
    }

    bytes_by_date
        .into_iter()
        .map(|(date, bytes)| XpBucket {
            date,
            amount_kb: bytes as f64 / 1000.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn xp_at(amount: u64, y: i32, m: u32, d: u32, hour: u32) -> Transaction {
        Transaction {
            kind: TransactionKind::Xp,
            amount,
            path: "/x/div-01/xp/graphql".to_string(),
            created_at: Utc.with_ymd_and_hms(y, m, d, hour, 30, 0).unwrap(),
            user_login: None,
        }
    }

    #[test]
    fn buckets_by_calendar_day_ascending() {
        let rows = vec![
            xp_at(2000, 2024, 5, 3, 9),
            xp_at(1000, 2024, 5, 1, 23),
            xp_at(500, 2024, 5, 1, 8),
        ];
        let buckets = bucket(&rows);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(buckets[0].amount_kb, 1.5);
        assert_eq!(buckets[1].date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        assert_eq!(buckets[1].amount_kb, 2.0);
    }

    #[test]
    fn bucket_total_matches_input_total_in_kb() {
        let rows = vec![
            xp_at(1234, 2024, 1, 1, 1),
            xp_at(4321, 2024, 1, 2, 2),
            xp_at(1000, 2024, 1, 1, 20),
        ];
        let total_kb: f64 = bucket(&rows).iter().map(|b| b.amount_kb).sum();
        let input_kb = rows.iter().map(|t| t.amount).sum::<u64>() as f64 / 1000.0;
        assert!((total_kb - input_kb).abs() < 1e-9);
    }

    #[test]
    fn offset_timestamps_bucket_on_the_utc_day() {
        // 01:30 at +03:00 is still 22:30 the previous day in UTC.
        let created_at = chrono::DateTime::parse_from_rfc3339("2024-05-02T01:30:00+03:00")
            .unwrap()
            .with_timezone(&Utc);
        let row = Transaction {
            created_at,
            ..xp_at(1000, 2024, 5, 2, 1)
        };
        let buckets = bucket(&[row]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn empty_and_non_xp_input_yield_no_buckets() {
        assert!(bucket(&[]).is_empty());
        let mut row = xp_at(100, 2024, 1, 1, 1);
        row.kind = TransactionKind::Down;
        assert!(bucket(&[row]).is_empty());
    }
}
