//! Phone number normalization
//!
//! The site renders all of an institution's phone numbers as one contact
//! blob, sometimes back to back with no separator. Matching on the repeating
//! `+994` country-code prefix splits such a blob back into distinct numbers.

use regex::Regex;
use std::sync::OnceLock;

/// An Azerbaijani number: the country-code prefix followed by a run of
/// digits and intervening whitespace. The run ends at the next `+`, which is
/// what splits concatenated numbers apart.
const PHONE_PATTERN: &str = r"\+994[\s\d]+";

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("hard-coded pattern compiles"))
}

/// Extracts individual phone numbers from a raw contact string
///
/// Each match has its internal whitespace collapsed to single spaces; the
/// result keeps first-occurrence order and drops exact duplicates. Input with
/// no matches yields an empty vector.
///
/// Handles both formats seen on the site:
/// - `+994 XX XXX XX XX` (with spaces)
/// - `+994XXXXXXXXX` (without spaces)
pub fn extract_phone_numbers(raw: &str) -> Vec<String> {
    let mut numbers = Vec::new();

    for found in phone_regex().find_iter(raw) {
        let normalized = found
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if !normalized.is_empty() && !numbers.contains(&normalized) {
            numbers.push(normalized);
        }
    }

    numbers
}
