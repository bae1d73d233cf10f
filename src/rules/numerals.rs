//! German number words.
//!
//! Coverage is deliberately shaped: every value below one hundred, plus the
//! round hundreds, thousands, ten- and hundred-thousands and millions. Values
//! outside those shapes have no rendering and callers leave them as digits.

/// Standalone words for 0–9 (`eins`, not `ein`).
pub static UNITS: [&str; 10] = ["null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun"];

/// Prefix forms for 0–9 used inside compounds (`einundzwanzig`, `einhundert`).
pub static STEMS: [&str; 10] = ["null", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun"];

pub static TEENS: [&str; 10] = [
    "zehn",
    "elf",
    "zwölf",
    "dreizehn",
    "vierzehn",
    "fünfzehn",
    "sechzehn",
    "siebzehn",
    "achtzehn",
    "neunzehn",
];

pub static DECADES: [&str; 10] =
    ["", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig"];

/// Leading words of a year, indexed by `year / 100 - 1`.
pub static CENTURIES: [&str; 20] = [
    "einhundert",
    "zweihundert",
    "dreihundert",
    "vierhundert",
    "fünfhundert",
    "sechshundert",
    "siebenhundert",
    "achthundert",
    "neunhundert",
    "eintausend",
    "elfhundert",
    "zwölfhundert",
    "dreizehnhundert",
    "vierzehnhundert",
    "fünfzehnhundert",
    "sechzehnhundert",
    "siebzehnhundert",
    "achtzehnhundert",
    "neunzehnhundert",
    "zweitausend",
];

/// Cardinal number word, or `None` outside the covered shapes.
pub fn cardinal(n: u64) -> Option<String> {
    if n < 100 {
        return Some(below_hundred(n as usize));
    }

    let word = match n {
        _ if n % 100 == 0 && n < 1_000 => format!("{}hundert", STEMS[(n / 100) as usize]),
        _ if n % 1_000 == 0 && n < 1_000_000 => thousands(n / 1_000)?,
        _ if n % 1_000_000 == 0 => millions(n / 1_000_000)?,
        _ => return None,
    };
    Some(word)
}

/// Cardinal in compound position: `1` becomes `ein` (`einmal`, `einjährig`).
pub fn compound_stem(n: u64) -> Option<String> {
    if n == 1 {
        return Some(STEMS[1].to_string());
    }
    cardinal(n).filter(|word| !word.contains(' '))
}

/// Ordinal stem without its inflection ending (`dritt`, `zwanzigst`).
pub fn ordinal_stem(n: u64) -> Option<String> {
    let stem = match n {
        1 => "erst".to_string(),
        3 => "dritt".to_string(),
        7 => "siebt".to_string(),
        8 => "acht".to_string(),
        _ if n < 20 => format!("{}t", cardinal(n)?),
        _ => format!("{}st", compound_stem(n)?),
    };
    Some(stem)
}

/// Spoken form of a calendar year in `[100, 2099]`.
///
/// Round centuries are only spoken as such between 1100 and 1900; outside that
/// band (`2000`, `500`) the plain cardinal is the natural reading and `None` is
/// returned.
pub fn year_word(year: u64) -> Option<String> {
    if !(100..=2099).contains(&year) {
        return None;
    }

    let century = CENTURIES[(year / 100 - 1) as usize];
    let rest = year % 100;
    match rest {
        0 if (1100..2000).contains(&year) => Some(century.to_string()),
        0 => None,
        _ => Some(format!("{century}{}", below_hundred(rest as usize))),
    }
}

fn below_hundred(n: usize) -> String {
    match n {
        0..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ if n % 10 == 0 => DECADES[n / 10].to_string(),
        _ => format!("{}und{}", STEMS[n % 10], DECADES[n / 10]),
    }
}

fn thousands(count: u64) -> Option<String> {
    let word = match count {
        1..=9 => format!("{}tausend", STEMS[count as usize]),
        10..=99 if count % 10 == 0 => format!("{}tausend", DECADES[(count / 10) as usize]),
        100..=999 if count % 100 == 0 => format!("{}hunderttausend", STEMS[(count / 100) as usize]),
        _ => return None,
    };
    Some(word)
}

fn millions(count: u64) -> Option<String> {
    let word = match count {
        1 => "eine million".to_string(),
        2..=9 => format!("{} millionen", UNITS[count as usize]),
        10..=99 if count % 10 == 0 => format!("{} millionen", DECADES[(count / 10) as usize]),
        _ => return None,
    };
    Some(word)
}
