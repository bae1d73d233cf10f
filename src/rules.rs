//! Immutable rule tables.
//!
//! Every table lives in its own submodule as plain static data. [`RuleTables`]
//! bundles them together with the lookup indexes derived from that data, is
//! built exactly once per process, and is handed to each pipeline stage by
//! reference.
//!
//! ```text
//! abbreviations.rs ──┐
//! calendar.rs      ──┼──▶ RuleTables::german() ──▶ DEFAULT_TABLES (Lazy)
//! context.rs       ──┤                                   │
//! numerals.rs      ──┘                                   ▼
//!                                              &RuleTables in every stage
//! ```

#[path = "rules/abbreviations.rs"]
pub mod abbreviations;
#[path = "rules/calendar.rs"]
pub mod calendar;
#[path = "rules/context.rs"]
pub mod context;
#[path = "rules/numerals.rs"]
pub mod numerals;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use abbreviations::{ABBREVIATIONS, Abbreviation};
use calendar::{MONTHS, MonthEntry, YEAR_MARKERS};
use context::CaseEnding;

/// Process-wide default tables for German.
pub static DEFAULT_TABLES: Lazy<RuleTables> = Lazy::new(RuleTables::german);

/// Read-only rule data shared by all pipeline stages.
#[derive(Debug)]
pub struct RuleTables {
    /// Abbreviations keyed by their compact surface form (no spaces).
    abbreviations: HashMap<String, &'static Abbreviation>,
    /// Month names and their variants, keyed by surface form.
    months: HashMap<&'static str, &'static MonthEntry>,
    year_markers: HashSet<&'static str>,
}

impl RuleTables {
    /// Build the German rule set from the static tables.
    pub fn german() -> Self {
        let abbreviations = ABBREVIATIONS.iter().map(|a| (a.compact(), a)).collect();

        let mut months = HashMap::new();
        for entry in MONTHS.iter() {
            months.insert(entry.name, entry);
            for variant in entry.variants {
                months.insert(*variant, entry);
            }
        }

        RuleTables { abbreviations, months, year_markers: YEAR_MARKERS.iter().copied().collect() }
    }

    /// Look up an abbreviation by its compact surface form (e.g. `"z.b."`).
    pub fn abbreviation(&self, compact: &str) -> Option<&'static Abbreviation> {
        self.abbreviations.get(compact).copied()
    }

    /// Look up a month by its full name or one of its short variants.
    pub fn month(&self, word: &str) -> Option<&'static MonthEntry> {
        self.months.get(word).copied()
    }

    /// Return true for a canonical (full) month name.
    pub fn is_month_name(&self, word: &str) -> bool {
        self.month(word).is_some_and(|m| m.name == word)
    }

    /// Words that mark a following number as a calendar year.
    pub fn is_year_marker(&self, word: &str) -> bool {
        self.year_markers.contains(word) || self.is_month_name(word)
    }

    /// Grammatical case implied by the words in front of an ordinal.
    pub fn case_before(&self, before_previous: Option<&str>, previous: Option<&str>) -> Option<CaseEnding> {
        context::case_from_predecessors(before_previous, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_index_months_by_every_variant() {
        let tables = RuleTables::german();

        assert_eq!(tables.month("jan").map(|m| m.name), Some("januar"));
        assert_eq!(tables.month("mär").map(|m| m.name), Some("märz"));
        assert_eq!(tables.month("oct").map(|m| m.name), Some("oktober"));
        assert!(tables.is_month_name("dezember"));
        assert!(!tables.is_month_name("dez"));
        assert!(tables.month("montag").is_none());
    }

    #[test]
    fn year_markers_include_month_names() {
        let tables = RuleTables::german();

        assert!(tables.is_year_marker("jahr"));
        assert!(tables.is_year_marker("weihnachten"));
        assert!(tables.is_year_marker("april"));
        assert!(!tables.is_year_marker("apr"));
        assert!(!tables.is_year_marker("haus"));
    }

    #[test]
    fn abbreviations_are_keyed_without_spaces() {
        let tables = RuleTables::german();

        assert_eq!(tables.abbreviation("z.b.").map(|a| a.expansion), Some("zum beispiel"));
        assert_eq!(tables.abbreviation("etal.").map(|a| a.form), Some("et al."));
        assert!(tables.abbreviation("z. b.").is_none());
    }
}
