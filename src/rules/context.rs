//! Case contexts for ordinal numbers.
//!
//! German ordinals inflect with the article or preposition in front of them:
//! `am 3.` → `am dritten`, `der 3.` → `der dritte`, `3. april` → `dritter april`.

/// Ending appended to an ordinal stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseEnding {
    /// `-en` after dative/accusative articles and prepositions.
    Dative,
    /// `-e` after nominative articles and determiners.
    Nominative,
    /// `-er` in a `<day>. <month>` date.
    Month,
}

impl CaseEnding {
    pub fn suffix(self) -> &'static str {
        match self {
            CaseEnding::Dative => "en",
            CaseEnding::Nominative => "e",
            CaseEnding::Month => "er",
        }
    }
}

pub static DATIVE_WORDS: &[&str] = &["am", "beim", "den", "des", "einen", "im", "seit", "vom", "zum"];
pub static DATIVE_PAIRS: &[(&str, &str)] = &[("an", "der"), ("an", "dieser"), ("in", "der"), ("in", "dieser")];
pub static DATIVE_SUFFIXES: &[&str] = &["einen", "em", "nes"];

pub static NOMINATIVE_WORDS: &[&str] = &["das", "der", "die", "dieser", "dieses", "jede", "jeder", "jedes"];

/// Case implied by the two words in front of an ordinal.
///
/// Two-word prepositional phrases win over the single article (`in der` vs `der`).
pub fn case_from_predecessors(before_previous: Option<&str>, previous: Option<&str>) -> Option<CaseEnding> {
    let previous = previous?;

    if let Some(first) = before_previous {
        if DATIVE_PAIRS.contains(&(first, previous)) {
            return Some(CaseEnding::Dative);
        }
    }

    if DATIVE_WORDS.contains(&previous) || DATIVE_SUFFIXES.iter().any(|s| previous.len() > s.len() && previous.ends_with(s))
    {
        return Some(CaseEnding::Dative);
    }

    if NOMINATIVE_WORDS.contains(&previous) {
        return Some(CaseEnding::Nominative);
    }

    None
}
