//! Token IR for the late, context-sensitive stages.
//!
//! Dates, numerals and years look at neighbouring words, which is awkward to
//! express as whole-string regexes. Once the chunk is free of punctuation it is
//! split into [`Token`]s, rewritten with index-based lookbehind/lookahead, and
//! joined back.

use super::codec::{self, PERIOD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of protected periods inside the token.
    pub fn period_count(&self) -> usize {
        self.text.chars().filter(|&c| c == PERIOD).count()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// A single letter or stray mark; digits and markers never count as stray.
    pub fn is_stray(&self) -> bool {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => !c.is_ascii_digit() && !codec::is_marker(c),
            _ => false,
        }
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::new).collect()
}

pub fn join(tokens: &[Token]) -> String {
    let words: Vec<&str> = tokens.iter().map(Token::as_str).collect();
    super::lexical::join_padded(&words)
}

/// Drop single-character tokens that carry no meaning on their own.
pub fn drop_stray(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|t| !t.is_stray()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_join() {
        let tokens = tokenize("  am  3\u{E000} mai ");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].period_count(), 1);
        assert_eq!(join(&tokens), " am 3\u{E000} mai ");
    }

    #[test]
    fn stray_tokens() {
        let tokens = tokenize("a b 5 \u{E002} ab ä");
        let kept: Vec<String> = drop_stray(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(kept, vec!["5", "\u{E002}", "ab"]);
    }
}
