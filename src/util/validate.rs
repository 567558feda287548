use regex::Regex;
use std::sync::LazyLock;

/// Signed integer literal with at least two ASCII digits, or a lone zero.
static INTEGER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[1-9][0-9]+$|^[-+]?0$").unwrap());

/// Tests whether a string is a numerical integer literal.
///
/// Single non-zero digits such as `"5"` are rejected while `"0"` is accepted; callers
/// rely on that grammar as-is.
#[must_use]
pub fn is_integer_literal(value: &str) -> bool {
    INTEGER_LITERAL.is_match(value)
}
