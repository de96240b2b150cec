use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A ledger row from the platform: XP gained, audit points given/received,
/// or skill progress. Fetched fresh per session, never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in bytes. XP is byte-accounted on the platform; conversion to
    /// kB/MB happens only at presentation boundaries.
    pub amount: u64,

    /// Slash-separated hierarchical path of the project/exercise.
    pub path: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "userLogin", default)]
    pub user_login: Option<String>,
}

/// Discriminator parsed from the wire `type` string. Skill rows use a
/// `skill_<name>` namespace; the name is stored with the prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Up,
    Down,
    Xp,
    Skill(String),
    Other(String),
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "up" => TransactionKind::Up,
            "down" => TransactionKind::Down,
            "xp" => TransactionKind::Xp,
            other => match other.strip_prefix("skill_") {
                Some(name) => TransactionKind::Skill(name.to_string()),
                None => TransactionKind::Other(other.to_string()),
            },
        }
    }

    /// The exact string the platform uses for this kind.
    pub fn wire_value(&self) -> String {
        match self {
            TransactionKind::Up => "up".to_string(),
            TransactionKind::Down => "down".to_string(),
            TransactionKind::Xp => "xp".to_string(),
            TransactionKind::Skill(name) => format!("skill_{name}"),
            TransactionKind::Other(raw) => raw.clone(),
        }
    }

    /// Skill name with the `skill_` prefix already stripped, if this is a
    /// skill row.
    pub fn skill_name(&self) -> Option<&str> {
        match self {
            TransactionKind::Skill(name) => Some(name),
            _ => None,
        }
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wire_value())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TransactionKind::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!(TransactionKind::parse("up"), TransactionKind::Up);
        assert_eq!(TransactionKind::parse("down"), TransactionKind::Down);
        assert_eq!(TransactionKind::parse("xp"), TransactionKind::Xp);
        assert_eq!(
            TransactionKind::parse("skill_go"),
            TransactionKind::Skill("go".to_string())
        );
        assert_eq!(
            TransactionKind::parse("level"),
            TransactionKind::Other("level".to_string())
        );
    }

    #[test]
    fn skill_wire_value_round_trips() {
        let kind = TransactionKind::parse("skill_js-front");
        assert_eq!(kind.skill_name(), Some("js-front"));
        assert_eq!(kind.wire_value(), "skill_js-front");
    }

    #[test]
    fn deserializes_graphql_row() {
        let json = r#"{
            "type": "xp",
            "amount": 17500,
            "path": "/bahrain/bh-module/div-01/xp/graphql",
            "createdAt": "2024-05-01T10:15:00Z",
            "userLogin": "jdoe"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Xp);
        assert_eq!(tx.amount, 17500);
        assert_eq!(tx.user_login.as_deref(), Some("jdoe"));
    }

    #[test]
    fn user_login_is_optional() {
        let json = r#"{
            "type": "up",
            "amount": 100,
            "path": "/x/y",
            "createdAt": "2024-05-01T10:15:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.user_login, None);
    }
}
