//! Character-class rewrites that do not need token context.

use super::codec;

/// Scrub, lowercase, and flatten brackets and whitespace runs to single spaces.
pub fn fold(chunk: &str) -> String {
    let text = codec::scrub(chunk).to_lowercase();
    rewrite!(&text, r"[()\[\]{}\s]+", " ")
}

/// Replace typographic noise with spaces.
///
/// ASCII periods stay; the abbreviation and initials stages still need them.
/// Whitespace runs are collapsed again, so later word-based stages see single spaces.
pub fn strip_typographic(text: &str) -> String {
    let text = rewrite!(text, r#"[;:!#_<>~…„“”»«›‹•·‚¨"^*?\\]"#, " ");
    let text = rewrite!(&text, r"\s['‘’´`]+|['‘’´`]+\s", " ");
    rewrite!(&text, r"\s{2,}", " ")
}

/// Remove the punctuation that is left once the protected forms are marked.
pub fn strip_punctuation(text: &str) -> String {
    let text = rewrite!(text, r"[,/.]", " ");
    let text = rewrite!(&text, r"['‘’´`]", "");
    rewrite!(&text, r"=(?: ?=){2,}|= =", " ")
}

/// Final cleanup: stray leading periods, whitespace, and leading non-alphanumerics.
pub fn finish(text: &str) -> String {
    let joined = text
        .split_whitespace()
        .map(|word| word.trim_start_matches('.'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    joined.trim_start_matches(|c: char| !c.is_alphanumeric()).to_string()
}

/// Split normalized text into its words.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Join words back into padded text, so boundary rules keep seeing a space on both ends.
pub fn join_padded<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::from(" ");
    for word in words {
        out.push_str(word.as_ref());
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases_and_flattens_brackets() {
        assert_eq!(fold(" Der (Große)\tHund\n[Test] "), " der große hund test ");
        assert_eq!(fold("A\u{E000}B"), "ab");
    }

    #[test]
    fn typographic_noise_becomes_space() {
        assert_eq!(strip_typographic(" „hallo“ welt! "), " hallo welt ");
        assert_eq!(strip_typographic(" z.b. "), " z.b. ");
        assert_eq!(strip_typographic(" ’quote’ it's "), " quote it's ");
    }

    #[test]
    fn punctuation_is_stripped_after_protection() {
        let cases: Vec<(&str, &str)> = vec![
            (" a  b ", " a, b "),
            (" ein ende  ", " ein ende. "),
            (" ja nein ", " ja/nein "),
            (" its ", " it's "),
            (" a   b ", " a = = b "),
            (" a   b ", " a === b "),
            (" a == b ", " a == b "),
            (" a = b ", " a = b "),
        ];

        for (expected, input) in cases {
            assert_eq!(strip_punctuation(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn finish_collapses_and_trims() {
        assert_eq!(finish("  .hallo   welt .  "), "hallo welt");
        assert_eq!(finish(" - 5 "), "5");
        assert_eq!(finish(" § ä "), "ä");
        assert_eq!(finish(""), "");
    }

    #[test]
    fn words_round_trip_through_padding() {
        let w = words("  a  b c ");
        assert_eq!(w, vec!["a", "b", "c"]);
        assert_eq!(join_padded(&w), " a b c ");
    }
}
