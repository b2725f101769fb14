use std::sync::LazyLock;

use regex::Regex;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("score pattern should compile"));

/// Reads the leading integer of a hazard score label.
///
/// `"7"` and `"7 - High"` give `Some(7)`. Text without a leading integer, and a
/// score of zero, give `None`.
pub fn parse_hazard_score(text: &str) -> Option<i32> {
    LEADING_INTEGER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|score| *score != 0)
}
