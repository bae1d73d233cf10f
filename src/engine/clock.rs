//! Clock times.
//!
//! `14:30 uhr`, `14.30 h` and `9.15 mez` are read as `vierzehn uhr dreißig`.
//! The rewrite happens on the protected text, before tokenization, and only
//! reorders digits around the word `uhr`; the numeral stage spells them out.

use super::tokens::Token;

/// Rewrite clock times into `H uhr MM` word order.
pub fn merge_clock_times(text: &str) -> String {
    let text = regex!(
        r"(?x)
        (^|\s) 0?(1\d|2[0-3]|\d) [\x{E000}\x{E003}] ([0-5]\d)
        \s+ \x{E002} \s+
        0?(1\d|2[0-3]|\d) (?: [\x{E000}\x{E003}] ([0-5]\d) )?
        \s? (?:uhr|h|cest|cet|mesz|mez) \b"
    )
    .replace_all(text, |caps: &regex::Captures| {
        let end_minutes = caps.get(5).map_or(String::new(), |m| format!(" {}", m.as_str()));
        format!("{}{} uhr {} bis {} uhr{}", &caps[1], &caps[2], &caps[3], &caps[4], end_minutes)
    })
    .into_owned();

    rewrite!(
        &text,
        r"(^|\s)0?(1\d|2[0-3]|\d)[\x{E000}\x{E003}]([0-5]\d)\s?(?:uhr|h|cest|cet|mesz|mez)\b",
        "${1}${2} uhr ${3}"
    )
}

/// `vierzehn uhr null` is spoken as `vierzehn uhr`.
pub fn drop_zero_minutes(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.text == "null" && out.last().is_some_and(|prev| prev.text == "uhr") {
            continue;
        }
        out.push(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokens::{join, tokenize};

    #[test]
    fn clock_times_are_reordered() {
        let cases: Vec<(&str, &str)> = vec![
            (" 14 uhr 30 ", " 14\u{E003}30 uhr "),
            (" 14 uhr 30 ", " 14\u{E000}30 h "),
            (" 9 uhr 15 ", " 09\u{E000}15mez "),
            (" 0 uhr 00 ", " 00\u{E003}00 uhr "),
            (" 14 uhr 30 bis 16 uhr 00 ", " 14\u{E000}30 \u{E002} 16\u{E000}00 uhr "),
            (" 9 uhr 00 bis 17 uhr ", " 9\u{E003}00  \u{E002}  17 uhr "),
            (" 24\u{E003}30 uhr ", " 24\u{E003}30 uhr "),
            (" 14\u{E003}75 uhr ", " 14\u{E003}75 uhr "),
            (" 14\u{E000}30 hose ", " 14\u{E000}30 hose "),
            (" 1 uhr 00 und 2 uhr 00 ", " 1\u{E003}00 uhr und 2\u{E003}00 uhr "),
        ];

        for (expected, input) in cases {
            assert_eq!(merge_clock_times(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn zero_minutes_after_uhr_are_dropped() {
        let tokens = tokenize("um vierzehn uhr null und null");
        assert_eq!(join(&drop_zero_minutes(tokens)), " um vierzehn uhr und null ");
    }
}
