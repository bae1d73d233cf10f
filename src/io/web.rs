//! Web pages as input: fetch, pick a charset, and reduce the markup to text.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

#[cfg(feature = "web")]
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:25.0) Gecko/20100101 Firefox/25.0";

/// Named entities mapped to what the pipeline should see.
///
/// Symbols the pipeline already knows (`€`, `§`, `×` ...) are kept as
/// characters so basic mode can still space them out; the rest become words
/// or plain spaces.
static NAMED_ENTITIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("nbsp", " "),
        ("quot", " "),
        ("apos", " "),
        ("laquo", " "),
        ("raquo", " "),
        ("ldquo", " "),
        ("rdquo", " "),
        ("bdquo", " "),
        ("sbquo", " "),
        ("lsquo", " "),
        ("rsquo", " "),
        ("lsaquo", " "),
        ("rsaquo", " "),
        ("hellip", " "),
        ("frasl", " "),
        ("lt", " "),
        ("gt", " "),
        ("larr", " "),
        ("rarr", " "),
        ("uarr", " "),
        ("darr", " "),
        ("ndash", "-"),
        ("mdash", "-"),
        ("shy", "-"),
        ("amp", "&"),
        ("euro", "€"),
        ("pound", "£"),
        ("yen", "¥"),
        ("sect", "§"),
        ("times", "×"),
        ("divide", "÷"),
        ("dagger", "†"),
        ("deg", "°"),
        ("frac12", "½"),
        ("cent", " cent "),
        ("permil", " promille "),
        ("copy", " copyright "),
        ("frac14", " ein viertel "),
        ("frac34", " drei viertel "),
        ("auml", "ä"),
        ("ouml", "ö"),
        ("uuml", "ü"),
        ("szlig", "ß"),
        ("aacute", "á"),
        ("acirc", "â"),
        ("agrave", "à"),
        ("aring", "å"),
        ("aelig", "æ"),
        ("ccedil", "ç"),
        ("eacute", "é"),
        ("ecirc", "ê"),
        ("egrave", "è"),
        ("iacute", "í"),
        ("icirc", "î"),
        ("oacute", "ó"),
        ("ocirc", "ô"),
        ("ograve", "ò"),
        ("oslash", "ø"),
        ("oelig", "œ"),
        ("uacute", "ú"),
        ("ucirc", "û"),
        ("yacute", "ý"),
        ("thorn", "þ"),
        ("eth", "ð"),
    ])
});

/// Code points whose numeric entity should read like its named twin.
fn numeric_override(code: u32) -> Option<&'static str> {
    Some(match code {
        34 | 39 | 160 | 448 | 8230 | 8592..=8595 => " ",
        162 => " cent ",
        169 => " copyright ",
        173 => "-",
        188 => " ein viertel ",
        190 => " drei viertel ",
        _ => return None,
    })
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        if let Some(text) = numeric_override(code) {
            return Some(text.to_string());
        }
        return char::from_u32(code).filter(|c| !c.is_control()).map(String::from);
    }

    NAMED_ENTITIES
        .get(body)
        .or_else(|| NAMED_ENTITIES.get(body.to_lowercase().as_str()))
        .map(|text| text.to_string())
}

/// Reduce an HTML document to its visible text, one trimmed line per
/// non-empty source line.
///
/// Unknown numeric entities are dropped; unknown named ones are left alone.
pub fn clean_html(html: &str) -> String {
    let text = rewrite!(html, r"(?is)<script.*?</script\s*>", " ");
    let text = rewrite!(&text, r"(?is)<style.*?</style\s*>", " ");
    let text = rewrite!(&text, r"(?s)<!--.*?-->", " ");
    let text = rewrite!(&text, r"(?s)<[^>]*>", " ");
    let text = rewrite!(&text, r"(?s)&lt;.*?&gt;", " ");
    let text = rewrite!(&text, r"&amp;nbsp;", " ");

    let text = regex!(r"&(#[xX]?[0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").replace_all(&text, |caps: &regex::Captures| {
        let body = &caps[1];
        match decode_entity(body) {
            Some(decoded) => decoded,
            None if body.starts_with('#') => String::new(),
            None => caps[0].to_string(),
        }
    });

    text.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join("\n")
}

/// Find a charset label in a `Content-Type` value or a `<meta>` tag.
pub fn sniff_charset(haystack: &str) -> Option<String> {
    regex!(r#"(?i)charset\s*=\s*["']?([a-z0-9_\-:.]+)"#)
        .captures(haystack)
        .map(|caps| caps[1].to_ascii_lowercase())
}

fn decode_body(bytes: &[u8], header_charset: Option<String>) -> String {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(4096)]);
    let label = header_charset.or_else(|| sniff_charset(&head));

    let encoding = label
        .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::WINDOWS_1252);
    log::debug!("decoding page as {}", encoding.name());
    encoding.decode(bytes).0.into_owned()
}

/// Download `url` and return its visible text.
#[cfg(feature = "web")]
pub fn fetch(url: &str) -> Result<String> {
    use std::time::Duration;

    let fail = |message: String| Error::Fetch { url: url.to_string(), message };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| fail(e.to_string()))?;
    let response = client.get(url).send().map_err(|e| fail(e.to_string()))?;
    if !response.status().is_success() {
        return Err(fail(format!("HTTP {}", response.status())));
    }

    let header_charset = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(sniff_charset);
    let bytes = response.bytes().map_err(|e| fail(e.to_string()))?;
    log::info!("fetched {} bytes from {url}", bytes.len());

    Ok(clean_html(&decode_body(&bytes, header_charset)))
}

#[cfg(not(feature = "web"))]
pub fn fetch(url: &str) -> Result<String> {
    Err(Error::Fetch { url: url.to_string(), message: "built without the `web` feature".to_string() })
}
