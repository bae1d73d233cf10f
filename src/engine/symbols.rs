//! Symbol handling: spelled out in extended mode, spaced out in basic mode.

/// Symbols with their German reading.
static SYMBOL_WORDS: &[(char, &str)] = &[
    ('$', "dollar"),
    ('+', "plus"),
    ('§', "paragraph"),
    ('€', "euro"),
    ('£', "pfund"),
    ('¥', "yen"),
    ('%', "prozent"),
    ('&', "und"),
    ('×', "mal"),
    ('÷', "geteilt durch"),
    ('²', "hoch zwei"),
    ('†', "gestorben"),
];

/// Return true for characters this module rewrites.
pub fn is_symbol(c: char) -> bool {
    SYMBOL_WORDS.iter().any(|(s, _)| *s == c) || matches!(c, '°' | '|' | '=')
}

pub fn spell_out(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SYMBOL_WORDS.iter().find(|(s, _)| *s == c) {
            Some((_, word)) => {
                out.push(' ');
                out.push_str(word);
                out.push(' ');
            }
            None => out.push(c),
        }
    }

    let out = rewrite!(&out, r"\s?°c\b", " grad celsius");
    let out = rewrite!(&out, r"\s?°f\b", " grad fahrenheit");
    let out = rewrite!(&out, r"°", " grad ");
    let out = rewrite!(&out, r"\|", " ");
    rewrite!(&out, r"==?", " ist ")
}

pub fn space_out(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if SYMBOL_WORDS.iter().any(|(s, _)| *s == c) {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    let out = rewrite!(&out, r"==?", " = ");
    rewrite!(&out, r"\s?°([cf])\b", " °${1}")
}
