//! Fixed GraphQL field selections.
//!
//! The aggregators parse fields by name, so these shapes must not drift;
//! any change here is a wire-contract change.

pub const USER: &str = "{ user { id login attrs } }";

pub const AUDIT_TRANSACTIONS: &str = r#"{ transaction(where: {type: {_in: ["up", "down"]}}) { type amount path createdAt userLogin } }"#;

pub const XP_TRANSACTIONS: &str = r#"{ transaction(where: {type: {_eq: "xp"}}) { type amount path createdAt userLogin } }"#;

/// One row per skill type, highest amount first, so the first row per type
/// is authoritative downstream.
pub const SKILL_TRANSACTIONS: &str = r#"{ transaction(where: {type: {_like: "skill_%"}}, distinct_on: [type], order_by: [{type: asc}, {amount: desc}]) { type amount path createdAt userLogin } }"#;

pub const PROGRESS: &str = "{ progress { path grade createdAt updatedAt } }";
