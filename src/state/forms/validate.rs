//! Pure field validation predicates
//!
//! These are the fixed syntactic rules the portal backend expects. The email
//! grammar is deliberately permissive (tld of 2-3 word characters, single
//! optional '.'/'-' separators) and must not be tightened: the backend accepts
//! exactly this shape.

use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("name pattern is valid"));

// ASCII word characters only, matching the backend's rule.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*@[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*(\.[0-9A-Za-z_]{2,3})+$",
    )
    .expect("email pattern is valid")
});

/// True iff the trimmed value is non-empty and purely alphabetic (a-z, A-Z).
pub fn is_valid_name(raw: &str) -> bool {
    NAME_RE.is_match(raw.trim())
}

/// True iff the trimmed value matches the portal's permissive email grammar.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw.trim())
}
