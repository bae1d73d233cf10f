//! Numeral expansion.
//!
//! Each token that starts with a digit is parsed into a [`NumeralToken`] and
//! rendered with the German word tables. Ordinals (`3.`) need the case implied
//! by the words in front of them, and `<day>. <month>` needs the month after
//! them, so rendering looks at the neighbours in the token list:
//!
//! ```text
//! am 3.        -> am dritten        (dative context)
//! die 3.       -> die dritte        (nominative context)
//! 3. apr       -> dritter april     (month context, month canonicalized)
//! seite 3.     -> seite drei        (no context: sentence period)
//! 3mal / 3x in -> dreimal
//! 3er          -> dreier
//! 1.000        -> eintausend
//! ```
//!
//! Tokens that do not parse are left exactly as they are. A number with no
//! German rendering in the tables keeps its digits but loses a trailing period.

use super::codec::{HYPHEN, PERIOD};
use super::tokens::Token;
use crate::rules::RuleTables;
use crate::rules::context::CaseEnding;
use crate::rules::numerals::{cardinal, compound_stem, ordinal_stem};

/// Written ordinal endings, longest first so `sten` wins over `st`.
const ORDINAL_ENDINGS: &[&str] = &[
    "sten", "ster", "stes", "stem", "ste", "st", "ten", "ter", "tes", "tem", "te", "t",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralForm {
    /// Plain digits.
    Cardinal,
    /// Digits followed by a protected period.
    OrdinalPeriod,
    /// Thousands groups joined by protected periods (`1.000.000`).
    Grouped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralToken {
    pub value: u64,
    pub form: NumeralForm,
    /// Letters glued to the number (`mal`, `er`, `jährige`), without a hyphen.
    pub suffix: Option<String>,
}

impl NumeralToken {
    pub fn parse(text: &str) -> Option<NumeralToken> {
        let digits_end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
        if digits_end == 0 {
            return None;
        }
        let (digits, rest) = text.split_at(digits_end);

        if rest.is_empty() {
            return Some(NumeralToken { value: digits.parse().ok()?, form: NumeralForm::Cardinal, suffix: None });
        }

        if rest.len() == PERIOD.len_utf8() && rest.starts_with(PERIOD) {
            return Some(NumeralToken { value: digits.parse().ok()?, form: NumeralForm::OrdinalPeriod, suffix: None });
        }

        if let Some(value) = parse_grouped(digits, rest) {
            return Some(NumeralToken { value, form: NumeralForm::Grouped, suffix: None });
        }

        let suffix = rest.strip_prefix(HYPHEN).unwrap_or(rest);
        if !suffix.is_empty() && suffix.chars().all(char::is_alphabetic) {
            return Some(NumeralToken {
                value: digits.parse().ok()?,
                form: NumeralForm::Cardinal,
                suffix: Some(suffix.to_string()),
            });
        }

        None
    }
}

/// `1` + `.000.000` with every group exactly three digits.
fn parse_grouped(head: &str, rest: &str) -> Option<u64> {
    if head.len() > 3 {
        return None;
    }
    let mut number = head.to_string();
    for group in rest.strip_prefix(PERIOD)?.split(PERIOD) {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        number.push_str(group);
    }
    number.parse().ok()
}

/// Expand every numeral token in place.
pub fn expand(mut tokens: Vec<Token>, tables: &RuleTables) -> Vec<Token> {
    for i in 0..tokens.len() {
        let Some(numeral) = NumeralToken::parse(&tokens[i].text) else {
            continue;
        };
        match render(&numeral, &mut tokens, i, tables) {
            Some(words) => tokens[i].text = words,
            // no words for it: keep the digits, drop the sentence period
            None if numeral.form == NumeralForm::OrdinalPeriod => {
                tokens[i].text.pop();
            }
            None => {}
        }
    }
    tokens
}

fn render(numeral: &NumeralToken, tokens: &mut [Token], i: usize, tables: &RuleTables) -> Option<String> {
    let value = numeral.value;

    match (&numeral.form, numeral.suffix.as_deref()) {
        (NumeralForm::Cardinal | NumeralForm::Grouped, None) => cardinal(value),
        (NumeralForm::OrdinalPeriod, _) => match ordinal_case(tokens, i, value, tables) {
            Some(ending) => Some(format!("{}{}", ordinal_stem(value)?, ending.suffix())),
            None => cardinal(value),
        },
        (_, Some("mal")) => Some(format!("{}mal", compound_stem(value)?)),
        (_, Some("x")) if multiplier_follows(tokens.get(i + 1)) => Some(format!("{}mal", compound_stem(value)?)),
        (_, Some("x")) => None,
        (_, Some(suffix)) => match ordinal_ending(suffix) {
            Some(ending) => Some(format!("{}{}", ordinal_stem(value)?, ending)),
            None => Some(format!("{}{}", compound_stem(value)?, suffix)),
        },
    }
}

/// Case context for `N.`; a following month is canonicalized as a side effect.
fn ordinal_case(tokens: &mut [Token], i: usize, day: u64, tables: &RuleTables) -> Option<CaseEnding> {
    let previous = i.checked_sub(1).map(|p| tokens[p].as_str());
    let before_previous = i.checked_sub(2).map(|p| tokens[p].as_str());
    if let Some(ending) = tables.case_before(before_previous, previous) {
        return Some(ending);
    }

    let next = tokens.get_mut(i + 1)?;
    let month = tables.month(&next.text)?;
    if !month.has_day(u32::try_from(day).ok()?) {
        return None;
    }
    next.text = month.name.to_string();
    Some(CaseEnding::Month)
}

/// The inflection left after removing the `t`/`st` of a written ordinal ending.
fn ordinal_ending(suffix: &str) -> Option<&str> {
    ORDINAL_ENDINGS.iter().find(|e| **e == suffix)?;
    suffix.strip_prefix("st").or_else(|| suffix.strip_prefix('t'))
}

/// `3x in der woche`, `2x am tag`, `5x pro jahr`.
fn multiplier_follows(next: Option<&Token>) -> bool {
    next.is_some_and(|t| t.text.starts_with('i') || t.text == "am" || t.text == "pro")
}
