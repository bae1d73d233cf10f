#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Apply a static regex substitution to `$text`, returning an owned `String`.
///
/// `$rep` follows `regex::Replacer` semantics (`$1`, `${name}`, or a closure).
#[macro_export]
macro_rules! rewrite {
    ($text:expr, $pat:literal, $rep:expr) => {
        $crate::regex!($pat).replace_all($text, $rep).into_owned()
    };
}
