//! Unit conversions live here and nowhere else: aggregates carry raw bytes
//! (or pre-divided kB for the timeline) and get scaled exactly once.

use xpdash_engine::AuditRatio;

pub fn mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1_000_000.0)
}

pub fn kb(bytes: u64) -> String {
    format!("{:.2} kB", bytes as f64 / 1000.0)
}

pub fn kb_value(amount_kb: f64) -> String {
    format!("{:.2} kB", amount_kb)
}

pub fn ratio(ratio: AuditRatio) -> String {
    match ratio {
        AuditRatio::Finite(value) => format!("{:.1}", value),
        AuditRatio::Infinite => "∞".to_string(),
    }
}

/// Round up to the next tenth unless already on one; the platform's
/// convention for skill bars.
pub fn round_up_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}
