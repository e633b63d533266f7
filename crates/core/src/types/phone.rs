//! Phone number formatting and validation for mobile-money checkout.
//!
//! Accepts Tanzanian mobile numbers in international (`+2557XXXXXXXX`) or
//! local (`07XXXXXXXX`) form. The pattern is deliberately not generalized
//! beyond this carrier format.

use std::sync::LazyLock;

use regex::Regex;

/// Accepted number shape after whitespace/dash stripping: an optional
/// `+255` or `0` prefix, then `7` and exactly eight more digits.
static VALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+255|0)?7\d{8}$").expect("pattern compiles"));

/// Normalize raw keystrokes into the canonical grouped display form.
///
/// Everything that is not an ASCII digit is dropped, except a `+` in
/// leading position. Numbers starting `+255` group as `+255 DDD DDD DDD`,
/// numbers starting `0` group as `0DDD DDD DDD`; surplus digits are
/// truncated and an empty trailing group is omitted. Inputs with any other
/// prefix, or with too few digits to form the first two groups, come back
/// cleaned but ungrouped.
///
/// The function re-runs on its own output on every keystroke, so it is
/// idempotent: `format(format(x)) == format(x)`.
#[must_use]
pub fn format(raw: &str) -> String {
    let cleaned = clean(raw);
    if let Some(rest) = cleaned.strip_prefix("+255") {
        group_international(rest).unwrap_or(cleaned)
    } else if cleaned.starts_with('0') {
        group_local(&cleaned).unwrap_or(cleaned)
    } else {
        cleaned
    }
}

/// Check whether `phone` is an accepted mobile number.
///
/// Whitespace and dashes are stripped first, so formatted display values
/// validate as-is. Anything else non-numeric makes the number invalid.
#[must_use]
pub fn is_valid(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    VALID.is_match(&cleaned)
}

/// Keep ASCII digits, plus a single `+` in leading position.
fn clean(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Group the digits after `+255` as `+255 DDD DDD DDD`.
///
/// Grouping needs the first two groups complete; otherwise the caller
/// falls back to the cleaned input.
fn group_international(rest: &str) -> Option<String> {
    if rest.len() < 6 {
        return None;
    }
    let mut digits = rest.chars();
    let first: String = digits.by_ref().take(3).collect();
    let second: String = digits.by_ref().take(3).collect();
    let third: String = digits.by_ref().take(3).collect();

    let mut out = format!("+255 {first} {second}");
    if !third.is_empty() {
        out.push(' ');
        out.push_str(&third);
    }
    Some(out)
}

/// Group a local number as `0DDD DDD DDD`.
fn group_local(cleaned: &str) -> Option<String> {
    if cleaned.len() < 7 {
        return None;
    }
    let mut digits = cleaned.chars();
    let first: String = digits.by_ref().take(4).collect();
    let second: String = digits.by_ref().take(3).collect();
    let third: String = digits.by_ref().take(3).collect();

    let mut out = format!("{first} {second}");
    if !third.is_empty() {
        out.push(' ');
        out.push_str(&third);
    }
    Some(out)
}
