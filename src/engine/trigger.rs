//! Trigger scanning (chunk pre-classification).
//!
//! This module inspects a folded chunk once and records which kinds of
//! characters it contains. The pipeline uses the result to skip stages whose
//! rules cannot possibly fire: a chunk without digits never needs numeral,
//! clock or year handling, and a chunk without dashes never needs the dash
//! scanner.
//!
//! ## Design notes
//!
//! - A feature bit is a necessary condition for a stage, never a sufficient
//!   one. False positives only cost time.
//! - The scan must stay cheaper than the stages it gates: one pass over the
//!   characters, no allocation.

use super::dashes::is_dash;
use super::symbols::is_symbol;

bitflags::bitflags! {
    /// Coarse character classes present in a chunk.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        const DIGITS = 1 << 0;
        const DASH   = 1 << 1;
        const PERIOD = 1 << 2;
        const SLASH  = 1 << 3;
        const SYMBOL = 1 << 4;
        const COLON  = 1 << 5;
    }
}

impl Features {
    /// Scan `text` for every feature bit.
    pub fn scan(text: &str) -> Self {
        let mut features = Features::empty();

        for c in text.chars() {
            features |= match c {
                '0'..='9' => Features::DIGITS,
                '.' => Features::PERIOD,
                '/' => Features::SLASH,
                ':' => Features::COLON,
                _ if is_dash(c) => Features::DASH,
                _ if is_symbol(c) => Features::SYMBOL,
                _ => Features::empty(),
            };
            if features.is_all() {
                break;
            }
        }

        features
    }
}
