//! Placeholder markers.
//!
//! Punctuation that carries meaning (decimal points, ordinal periods, compound
//! hyphens, numeric ranges, clock colons) must survive the stripping stages.
//! It is swapped for a private-use character early and swapped back at the end.
//! Input is scrubbed of the whole private-use block first, so a marker can only
//! ever have been written by the pipeline itself.

use crate::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Period,
    Hyphen,
    Range,
    Colon,
}

pub const PERIOD: char = Marker::Period.as_char();
pub const HYPHEN: char = Marker::Hyphen.as_char();
pub const COLON: char = Marker::Colon.as_char();

/// A range marker with the spaces it always travels with.
pub const SPACED_RANGE: &str = " \u{E002} ";

const PRIVATE_USE: std::ops::RangeInclusive<char> = '\u{E000}'..='\u{F8FF}';

impl Marker {
    pub const ALL: [Marker; 4] = [Marker::Period, Marker::Hyphen, Marker::Range, Marker::Colon];

    pub const fn as_char(self) -> char {
        match self {
            Marker::Period => '\u{E000}',
            Marker::Hyphen => '\u{E001}',
            Marker::Range => '\u{E002}',
            Marker::Colon => '\u{E003}',
        }
    }

    pub fn from_char(c: char) -> Option<Marker> {
        Marker::ALL.into_iter().find(|m| m.as_char() == c)
    }

    /// Text a marker turns back into.
    pub fn restored(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Marker::Period, _) => ".",
            (Marker::Hyphen, _) => "-",
            (Marker::Range, Mode::Extended) => " bis ",
            (Marker::Range, Mode::Basic) => " - ",
            (Marker::Colon, _) => " ",
        }
    }

    /// Printable stand-in used by debug traces.
    pub fn reveal(self) -> &'static str {
        match self {
            Marker::Period => "⟨.⟩",
            Marker::Hyphen => "⟨-⟩",
            Marker::Range => "⟨~⟩",
            Marker::Colon => "⟨:⟩",
        }
    }
}

pub fn is_marker(c: char) -> bool {
    Marker::from_char(c).is_some()
}

/// Remove every private-use character from raw input.
pub fn scrub(text: &str) -> String {
    text.chars().filter(|c| !PRIVATE_USE.contains(c)).collect()
}

/// Protect punctuation attached to digits.
pub fn protect_numeric(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Extended => protect_numeric_extended(text),
        Mode::Basic => protect_numeric_basic(text),
    }
}

fn protect_numeric_extended(text: &str) -> String {
    let text = between_digits(text, |c| c == ':', &COLON.to_string());
    let text = between_digits(&text, |c| c == '-', SPACED_RANGE);
    let text = regex!(r"\b(\d{1,3})((?: \d{3})+)\b")
        .replace_all(&text, |caps: &regex::Captures| format!("{}{}", &caps[1], caps[2].replace(' ', "\u{E000}")))
        .into_owned();
    let text = rewrite!(&text, r"(\d)\. ?jh(?:dt?)?\.", "${1}. jahrhundert ");
    let text = rewrite!(&text, r"\.(\d)", "\u{E000}${1}");
    let text = rewrite!(&text, r"(\d)\.", "${1}\u{E000}");
    let text = rewrite!(&text, r",(\d)", "\u{E000}${1}");
    let text = rewrite!(&text, r"(\d) ?km\b", "${1} kilometer");
    let text = rewrite!(&text, r"(\d) ?kg\b", "${1} kilogramm");
    rewrite!(&text, r" -(\d)", " minus ${1}")
}

fn protect_numeric_basic(text: &str) -> String {
    let text = rewrite!(text, r"(\d)km\b", "${1} km");
    let text = rewrite!(&text, r"(\d)kg\b", "${1} kg");
    let text = rewrite!(&text, r" -(\d)", " \u{E001}${1}");
    rewrite!(&text, r"(\d)\.", "${1}\u{E000}")
}

/// Replace every `target` character flanked by ASCII digits on both sides.
///
/// Works on overlapping runs such as `1:2:3`, which a single regex pass misses.
fn between_digits(text: &str, target: impl Fn(char) -> bool, replacement: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let flanked = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if flanked && target(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Protect the periods of single-letter initials (`u.s.a.`, `z.`).
pub fn protect_initials(text: &str) -> String {
    protect_initial_runs(text, |c| c.is_ascii_lowercase())
}

/// Same as [`protect_initials`] for umlaut initials (`ä.`, and `o. ä.` chains).
pub fn protect_umlaut_initials(text: &str) -> String {
    protect_initial_runs(text, |c| matches!(c, 'ä' | 'ö' | 'ü'))
}

fn protect_initial_runs(text: &str, is_initial: impl Fn(char) -> bool) -> String {
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            let core = word.strip_suffix(',').unwrap_or(word);
            if is_initial_run(core, &is_initial) {
                word.replace('.', &PERIOD.to_string())
            } else {
                word.to_string()
            }
        })
        .collect();
    words.join(" ")
}

/// `x.` pairs only, at least one of them with a real period and one `is_initial` letter.
fn is_initial_run(word: &str, is_initial: &impl Fn(char) -> bool) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return false;
    }

    let pairs_ok = chars
        .chunks(2)
        .all(|pair| (pair[0].is_ascii_lowercase() || is_initial(pair[0])) && matches!(pair[1], '.' | PERIOD));
    pairs_ok && chars.contains(&'.') && chars.chunks(2).any(|pair| is_initial(pair[0]))
}

/// Turn markers back into text.
pub fn restore(text: &str, mode: Mode) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match Marker::from_char(c) {
            Some(marker) => out.push_str(marker.restored(mode)),
            None => out.push(c),
        }
    }
    out
}

/// Colons the clock stage did not consume become word breaks before tokenization.
pub fn release_colons(text: &str) -> String {
    text.replace(COLON, " ")
}

/// Make markers visible for traces.
pub fn reveal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match Marker::from_char(c) {
            Some(marker) => out.push_str(marker.reveal()),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_removes_private_use_characters() {
        assert_eq!(scrub("a\u{E000}b\u{E002}c\u{F8FF}"), "abc");
        assert_eq!(scrub("äöü ß"), "äöü ß");
    }

    #[test]
    fn markers_round_trip_through_chars() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_char(marker.as_char()), Some(marker));
        }
        assert_eq!(Marker::from_char('.'), None);
    }

    #[test]
    fn extended_protection() {
        let cases: Vec<(&str, &str)> = vec![
            (" 3\u{E000}4\u{E000}2020 ", " 3.4.2020 "),
            (" 14\u{E003}30 ", " 14:30 "),
            (" 1\u{E003}2\u{E003}3 ", " 1:2:3 "),
            (" 10 \u{E002} 15 ", " 10-15 "),
            (" 3\u{E000}5 ", " 3,5 "),
            (" 1\u{E000}000\u{E000}000 ", " 1 000 000 "),
            (" 19\u{E000} jahrhundert  ", " 19. jh. "),
            (" 50 kilometer ", " 50km "),
            (" 5 kilogramm ", " 5 kg "),
            (" minus 5 ", " -5 "),
            (" ende. ", " ende. "),
        ];

        for (expected, input) in cases {
            assert_eq!(protect_numeric(input, Mode::Extended), expected, "input {input:?}");
        }
    }

    #[test]
    fn basic_protection() {
        let cases: Vec<(&str, &str)> = vec![
            (" 50 km ", " 50km "),
            (" \u{E001}5 ", " -5 "),
            (" 3\u{E000} mai ", " 3. mai "),
            (" 3\u{E000}4\u{E000}2020 ", " 3.4.2020 "),
            (" 10-15 ", " 10-15 "),
        ];

        for (expected, input) in cases {
            assert_eq!(protect_numeric(input, Mode::Basic), expected, "input {input:?}");
        }
    }

    #[test]
    fn initials_keep_their_periods() {
        assert_eq!(protect_initials(" u.s.a. "), " u\u{E000}s\u{E000}a\u{E000} ");
        assert_eq!(protect_initials(" z. b., "), " z\u{E000} b\u{E000}, ");
        assert_eq!(protect_initials(" ende. "), " ende. ");
        assert_eq!(protect_initials(" a.b "), " a.b ");
        assert_eq!(protect_umlaut_initials(" o\u{E000} ä. "), " o\u{E000} ä\u{E000} ");
        assert_eq!(protect_umlaut_initials(" ab. "), " ab. ");
    }

    #[test]
    fn loose_colons_split_tokens() {
        let cases: Vec<(&str, &str)> = vec![
            (" 2 1 ", " 2\u{E003}1 "),
            (" 1 2 3 ", " 1\u{E003}2\u{E003}3 "),
            (" 14 uhr 30 ", " 14 uhr 30 "),
            (" 3\u{E000}5 ", " 3\u{E000}5 "),
        ];

        for (expected, input) in cases {
            assert_eq!(release_colons(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn restore_depends_on_mode() {
        let text = format!("10{SPACED_RANGE}15 online{HYPHEN}shop 3{PERIOD} 14{COLON}30");
        assert_eq!(restore(&text, Mode::Extended), "10  bis  15 online-shop 3. 14 30");
        assert_eq!(restore(&text, Mode::Basic), "10  -  15 online-shop 3. 14 30");
    }
}
