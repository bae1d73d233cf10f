//! Rule-based tokenizer and normalizer for German text.
//!
//! Raw text goes in, a lower-cased stream of whitespace-separated tokens comes
//! out. Punctuation that carries meaning (ordinal periods, compound hyphens,
//! numeric ranges, abbreviations) is kept; everything else is stripped. In
//! [`Mode::Extended`] numerals, dates, clock times and years are additionally
//! spelled out as German words.
//!
//! ```
//! use wortform::{Options, normalize};
//!
//! let out = normalize(&["Am 3.4.2020 im Online-Shop"], &Options::extended());
//! assert_eq!(out, "am dritten april zweitausendzwanzig im online-shop");
//! ```

#[macro_use]
mod macros;
mod api;
pub mod config;
mod debug_report;
mod engine;
mod error;
pub mod io;
mod rules;

pub use api::{NormalizeVerbose, Normalizer, Options, join_chunk, normalize, normalize_verbose, normalize_with};
pub use debug_report::{Palette, render_metrics, render_trace};
pub use engine::{Features, RunMetrics, StageMetrics, StageTrace};
pub use error::{Error, Result};
pub use rules::{DEFAULT_TABLES, RuleTables};

/// Which family of rewrites runs after punctuation handling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Tokenize and protect punctuation; digits stay digits.
    #[default]
    Basic,
    /// Additionally spell out symbols, numerals, dates, clock times and years.
    Extended,
}
