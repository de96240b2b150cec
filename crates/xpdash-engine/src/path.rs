// Project-name extraction from transaction paths.
//
// Paths are hierarchical, e.g. "/bahrain/bh-module/div-01/xp/piscine-go",
// but platform revisions moved the project segment around. Extraction is an
// ordered rule list evaluated front to back so each heuristic stays
// testable on its own.

/// Institution-specific subtrees whose transactions are dropped entirely.
const EXCLUDED_SUBTREES: [&str; 2] = ["/bahrain/bh-module/checkpoint", "/bahrain/bh-piscine"];

/// Grouping segments that never name a project.
const STRUCTURAL_PREFIX: &str = "div-";

/// Fixed display-name remaps applied after extraction.
const DISPLAY_NAMES: [(&str, &str); 1] = [("piscine-js", "Piscine JS")];

/// Fallback when a path yields no usable segment at all.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Extraction rules in precedence order; the first match wins.
const RULES: [fn(&str) -> Option<String>; 2] = [xp_segment, trailing_segment];

/// Whether the whole transaction should be dropped as institution noise.
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_SUBTREES.iter().any(|subtree| path.contains(subtree))
}

/// Derive a display-ready project name from a transaction path.
pub fn project_name(path: &str) -> String {
    match RULES.iter().find_map(|rule| rule(path)) {
        Some(name) => normalize(&name),
        None => UNKNOWN_PROJECT.to_string(),
    }
}

/// Rule 1: the segment immediately after a literal `/xp/` segment, up to
/// the next slash or the end of the path.
fn xp_segment(path: &str) -> Option<String> {
    let (_, rest) = path.split_once("/xp/")?;
    let name = match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Rule 2: the last meaningful segment. Grouping segments (`div-*`, the
/// bare `xp`/`skill` namespaces) defer to the segment before them, or to
/// the first segment when nothing else qualifies.
fn trailing_segment(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.last()?;
    if !is_structural(last) {
        return Some((*last).to_string());
    }
    segments
        .iter()
        .rev()
        .skip(1)
        .find(|segment| !is_structural(segment))
        .or_else(|| segments.first())
        .map(|segment| (*segment).to_string())
}

fn is_structural(segment: &str) -> bool {
    segment.starts_with(STRUCTURAL_PREFIX) || segment == "xp" || segment == "skill"
}

fn normalize(name: &str) -> String {
    let name = name.strip_prefix("xp-").unwrap_or(name);
    for (from, to) in DISPLAY_NAMES {
        if name == from {
            return to.to_string();
        }
    }
    name.to_string()
}
