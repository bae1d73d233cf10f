//! Normalization engine.
//!
//! This module is the entry point for the staged rewrite engine. Every stage
//! lives in a focused submodule under `src/engine/`; [`Pipeline`] wires them
//! together in a fixed order.
//!
//! ## How the parts work together
//!
//! A chunk of raw lines flows through the stages as plain text first and as a
//! token list at the end:
//!
//! ```text
//! chunk ── fold (lexical.rs) ──┬── Features::scan (trigger.rs)
//!                              │     gates the stages below
//!                              v
//!          protect_numeric (codec.rs)      3.4.  14:30  10-15  1 000
//!          strip_typographic (lexical.rs)
//!          resolve (abbreviations.rs)      z.b.  bzw.  str. 5  km/h
//!          disambiguate (dashes.rs)        online-shop  10–15  ein- und
//!          protect_initials (codec.rs)     u.s.a.  o. ä.
//!          strip_punctuation (lexical.rs)
//!                              │
//!            extended mode ────┼──── basic mode
//!                              │
//!   spell_out (symbols.rs)     │     space_out (symbols.rs)
//!   merge_clock_times (clock.rs)
//!   release_colons (codec.rs)
//!   tokenize (tokens.rs)
//!   clarify (dates.rs)
//!   drop_stray (tokens.rs)
//!   expand (numerals.rs)
//!   drop_zero_minutes (clock.rs)
//!   detect (years.rs)
//!                              │
//!                              v
//!          restore (codec.rs) ── finish (lexical.rs) ── output
//! ```
//!
//! Meaningful punctuation is carried through the stripping stages as
//! private-use marker characters (see `codec.rs`); nothing downstream of
//! `restore` ever sees one.
//!
//! ## Responsibilities by module
//!
//! - `codec.rs`: markers, scrubbing, numeric and initials protection, restore.
//! - `lexical.rs`: context-free character-class rewrites and final cleanup.
//! - `abbreviations.rs`: word-window abbreviation matching.
//! - `dashes.rs`: compound hyphen vs range vs separator.
//! - `symbols.rs`: currency, math and unit symbols.
//! - `tokens.rs`: token IR for the late stages.
//! - `clock.rs`, `dates.rs`, `years.rs`: time expressions.
//! - `numerals.rs`: digits to German number words.
//! - `trigger.rs`: coarse feature scan used to skip stages.
//! - `metrics.rs`: per-stage traces and run totals.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=wortform=trace` to log the text after every stage, or
//! use [`crate::normalize_verbose`] to get the same traces as data.

#[path = "engine/abbreviations.rs"]
mod abbreviations;
#[path = "engine/clock.rs"]
mod clock;
#[path = "engine/codec.rs"]
pub(crate) mod codec;
#[path = "engine/dashes.rs"]
mod dashes;
#[path = "engine/dates.rs"]
mod dates;
#[path = "engine/lexical.rs"]
mod lexical;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/numerals.rs"]
mod numerals;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/symbols.rs"]
mod symbols;
#[path = "engine/tokens.rs"]
mod tokens;
#[path = "engine/trigger.rs"]
mod trigger;
#[path = "engine/years.rs"]
mod years;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use metrics::{RunMetrics, StageMetrics, StageTrace};
pub use pipeline::Pipeline;
pub use trigger::Features;
