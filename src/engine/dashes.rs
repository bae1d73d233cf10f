//! Hyphen versus dash.
//!
//! A dash inside a compound (`online-shop`, `covid-19`, `3-fach`) is kept as a
//! hyphen marker. The elided first half of a coordinated compound (`ein- und
//! ausgang`, `vor-, nach-`) is kept too. A dash between two numbers becomes a
//! range. Every other dash is a separator and turns into a space.

use super::codec::{HYPHEN, SPACED_RANGE};

const SOFT_HYPHEN: char = '\u{00AD}';

pub fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2010}'..='\u{2014}' | '\u{2212}' | SOFT_HYPHEN)
}

pub fn disambiguate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_dash(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let letter_before = prev.is_some_and(char::is_alphabetic);
        let digit_before = prev.is_some_and(|p| p.is_ascii_digit());
        let letter_after = next.is_some_and(char::is_alphabetic);
        let digit_after = next.is_some_and(|n| n.is_ascii_digit());

        if c == SOFT_HYPHEN && letter_before && letter_after {
            // hyphenation point, not a compound
        } else if (letter_before && (letter_after || digit_after)) || (digit_before && letter_after) {
            out.push(HYPHEN);
        } else if letter_before && next == Some(',') {
            out.push(HYPHEN);
            i += 1;
        } else if letter_before && next == Some(' ') && is_coordination(&chars[i + 2..]) {
            out.push(HYPHEN);
        } else if is_numeric_range(&chars, i) {
            out.push_str(SPACED_RANGE);
        } else {
            out.push(' ');
        }
        i += 1;
    }

    out
}

/// The text after `<letter>- ` starts with `und`, `oder`, `&` or another
/// elided half (`ein- aus- und umbau`).
fn is_coordination(rest: &[char]) -> bool {
    let word: String = rest.iter().take_while(|c| !c.is_whitespace()).collect();
    matches!(word.as_str(), "und" | "oder" | "&") || is_elided_half(&word)
}

fn is_elided_half(word: &str) -> bool {
    let mut chars = word.trim_end_matches(',').chars().rev();
    chars.next().is_some_and(is_dash) && chars.next().is_some_and(char::is_alphabetic)
}

/// Digit, at most one space, the dash, at most one space, digit.
fn is_numeric_range(chars: &[char], at: usize) -> bool {
    let before = match at.checked_sub(1).map(|p| chars[p]) {
        Some(' ') => at.checked_sub(2).map(|p| chars[p]),
        other => other,
    };
    let after = match chars.get(at + 1) {
        Some(' ') => chars.get(at + 2),
        other => other,
    };
    before.is_some_and(|c| c.is_ascii_digit()) && after.is_some_and(|c| c.is_ascii_digit())
}
