//! Numeric dates and noise tokens.
//!
//! `3.4.2020` reaches this stage as one token with two protected periods. It is
//! split into `3.` `april` `2020` so the numeral and year stages can read each
//! part with the right context. Tokens with more protected periods than any date
//! or version number has, and overlong tokens, are treated as noise (URLs,
//! table rulers, hashes) and dropped.

use log::trace;

use super::codec::PERIOD;
use super::tokens::Token;
use crate::rules::calendar::month_by_number;

const MAX_PERIODS: usize = 3;
const MAX_TOKEN_CHARS: usize = 50;

pub fn clarify(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let periods = token.period_count();
        if periods > MAX_PERIODS || token.char_len() > MAX_TOKEN_CHARS {
            trace!("dropping noise token {:?}", token.text);
            continue;
        }
        // `3.4.2020.` at the end of a sentence carries one period too many.
        let date = match periods {
            2 => Some(token.text.as_str()),
            3 => token.text.strip_suffix(PERIOD),
            _ => None,
        };
        if let Some(parts) = date.and_then(split_date) {
            out.extend(parts);
            continue;
        }
        out.push(token);
    }

    out
}

/// Split `D.M.Y` (or `D.M.`) with a plausible month into day, month name and year.
fn split_date(text: &str) -> Option<Vec<Token>> {
    let mut fields = text.split(PERIOD);
    let (day, month, year) = (fields.next()?, fields.next()?, fields.next()?);

    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let entry = month_by_number(month.parse().ok()?)?;

    let mut parts = Vec::with_capacity(3);
    if !day.is_empty() {
        parts.push(Token::new(format!("{day}{PERIOD}")));
    }
    parts.push(Token::new(entry.name));
    if !year.is_empty() {
        parts.push(Token::new(year));
    }
    Some(parts)
}
