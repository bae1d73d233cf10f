//! Calendar years.
//!
//! A number directly after a year marker (`jahr`, `sommer`, `geboren`, a month
//! name) is spoken by centuries: `1975` → `neunzehnhundertfünfundsiebzig`.
//! Runs after the numeral stage; values it already spelled out (`2000`,
//! `1000`, anything below one hundred) no longer parse as digits here.

use super::codec::PERIOD;
use super::tokens::Token;
use crate::rules::RuleTables;
use crate::rules::numerals::year_word;

pub fn detect(mut tokens: Vec<Token>, tables: &RuleTables) -> Vec<Token> {
    for i in 1..tokens.len() {
        if !tables.is_year_marker(&tokens[i - 1].text) {
            continue;
        }
        if let Some(word) = parse_year(&tokens[i].text).and_then(year_word) {
            tokens[i].text = word;
        }
    }
    tokens
}

/// Three or four digits without a leading zero, optionally closed by a sentence period.
fn parse_year(text: &str) -> Option<u64> {
    let digits = text.strip_suffix(PERIOD).unwrap_or(text);
    if !(3..=4).contains(&digits.len()) || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
