//! PII field redaction for formatted log lines.
//!
//! Replaces the values of sensitive `key=value` pairs with a fixed
//! marker while leaving every other pair and the surrounding format
//! untouched.

use regex::{Captures, Regex};

/// Fields whose values must never appear in plaintext logs.
pub const PII_FIELDS: &[&str] = &["name", "email", "phone", "ssn", "password"];

/// Build the extraction pattern for a field set.
///
/// Matches `<field>=<value>` where `<value>` runs up to the next
/// separator or end of line. Field names and the separator are
/// escaped, so metacharacters in either match literally.
pub fn build_extract_pattern(fields: &[&str], separator: char) -> Regex {
    let alternation = fields
        .iter()
        .map(|field| regex::escape(field))
        .collect::<Vec<_>>()
        .join("|");
    let separator = regex::escape(&separator.to_string());
    let pattern = format!("(?P<field>{})=[^{}]*", alternation, separator);

    Regex::new(&pattern).expect("escaped field pattern is always valid")
}

/// Build the substitution for a redaction marker.
///
/// Keeps the matched field name and replaces the value with the marker.
pub fn build_replacement(marker: &str) -> impl Fn(&Captures<'_>) -> String + '_ {
    move |caps: &Captures<'_>| format!("{}={}", &caps["field"], marker)
}

/// Redact the values of `fields` in a single log message.
///
/// Every `<field>=<value>` pair with `field` in the set has its value
/// replaced by `marker`, all fields in one pass. An empty field set
/// returns the message unchanged.
pub fn filter_datum(fields: &[&str], marker: &str, message: &str, separator: char) -> String {
    if fields.is_empty() {
        return message.to_string();
    }

    let pattern = build_extract_pattern(fields, separator);
    pattern
        .replace_all(message, build_replacement(marker))
        .into_owned()
}
