//! Identifier casing used for enum members.
//!
//! Both functions are regex-driven and only touch the characters their
//! patterns match. Inner capitals of a token that is
//! not preceded by a separator survive (`serviceAccount` pascalizes to
//! `ServiceAccount`), while a separated token is lowercased after its first
//! letter (`service ACCOUNT` pascalizes to `ServiceAccount` as well).

use regex::{Captures, Regex};
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]|[A-Z]|(?-u:\b)[A-Za-z0-9_]|\s+").expect("valid regex")
});
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").expect("valid regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid regex"));
static SEPARATED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(.)([A-Za-z0-9_]*)").expect("valid regex"));
static FIRST_WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]").expect("valid regex"));

/// `ServiceAccount` -> `serviceAccount`, `service account` -> `serviceAccount`.
///
/// Whitespace runs and a bare `0` at a word boundary are removed.
pub fn camelize(s: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(s, |caps: &Captures<'_>| {
            let m = caps.get(0).expect("whole match");
            let text = m.as_str();
            if text == "0" || text.chars().all(char::is_whitespace) {
                String::new()
            } else if m.start() == 0 {
                text.to_lowercase()
            } else {
                text.to_uppercase()
            }
        })
        .into_owned()
}

/// `service_account` / `service-account` / `service account` -> `ServiceAccount`.
pub fn pascalize(s: &str) -> String {
    let spaced = DASHES.replace_all(s, " ");
    let cleaned = NON_WORD.replace_all(&spaced, "");
    let joined = SEPARATED_TOKEN.replace_all(&cleaned, |caps: &Captures<'_>| {
        format!("{}{}", caps[1].to_uppercase(), caps[2].to_lowercase())
    });
    FIRST_WORD_CHAR
        .replace(&joined, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}
