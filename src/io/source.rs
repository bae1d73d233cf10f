use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::web;
use crate::error::{Error, Result};

/// How bytes from local files are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid sequences become U+FFFD and a BOM is dropped.
    Utf8,
    /// A single-byte legacy code page (windows-1252 unless configured otherwise).
    Legacy(&'static encoding_rs::Encoding),
}

impl Encoding {
    pub fn legacy() -> Self {
        Encoding::Legacy(encoding_rs::WINDOWS_1252)
    }

    /// Resolve a WHATWG label such as `"utf-8"`, `"latin1"` or `"iso-8859-15"`.
    pub fn from_label(label: &str) -> Self {
        match encoding_rs::Encoding::for_label(label.trim().as_bytes()) {
            Some(enc) if enc == encoding_rs::UTF_8 => Encoding::Utf8,
            Some(enc) => Encoding::Legacy(enc),
            None => {
                warn!("unknown encoding label {label:?}, falling back to windows-1252");
                Encoding::legacy()
            }
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        let enc = match self {
            Encoding::Utf8 => encoding_rs::UTF_8,
            Encoding::Legacy(enc) => *enc,
        };
        let (text, _, had_errors) = enc.decode(bytes);
        if had_errors {
            debug!("malformed {} input replaced", enc.name());
        }
        text.into_owned()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Legacy(enc) => enc.name(),
        }
    }
}

/// One input to normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    Stdin,
}

impl Source {
    /// Read the whole source as text. URLs are fetched and stripped of markup.
    pub fn load(&self, encoding: Encoding) -> Result<String> {
        match self {
            Source::File(path) => {
                let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
                Ok(encoding.decode(&bytes))
            }
            Source::Url(url) => web::fetch(url),
            Source::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes).map_err(|e| Error::io("<stdin>", e))?;
                Ok(encoding.decode(&bytes))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Url(url) => url.clone(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Sources behind one address, plus the output subdirectory they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub sources: Vec<Source>,
    /// Set for directories and listing files; outputs go to `<root>/<target>/`.
    pub target: Option<String>,
}

impl Resolved {
    /// More than one source may be behind this address; failures are skipped, not fatal.
    pub fn is_batch(&self) -> bool {
        self.target.is_some()
    }
}

fn is_url(address: &str) -> bool {
    let lower = address.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn last_component(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Classify `address` as stdin (`-`), a URL, a directory or a file.
pub fn resolve(address: &str) -> Result<Resolved> {
    let address = address.trim();
    if address == "-" {
        return Ok(Resolved { sources: vec![Source::Stdin], target: None });
    }
    if is_url(address) {
        return Ok(Resolved { sources: vec![Source::Url(address.to_string())], target: None });
    }

    let path = Path::new(address);
    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
            let entry = entry.map_err(|e| Error::io(path, e))?;
            if entry.path().is_file() {
                files.push(entry.path());
            }
        }
        if files.is_empty() {
            return Err(Error::NoInputFiles(path.to_path_buf()));
        }
        files.sort();
        debug!("{} files in {}", files.len(), path.display());

        let target = last_component(&path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        return Ok(Resolved { sources: files.into_iter().map(Source::File).collect(), target });
    }
    if path.is_file() {
        return Ok(Resolved { sources: vec![Source::File(path.to_path_buf())], target: None });
    }

    Err(Error::Unresolvable(address.to_string()))
}

/// Read one address per non-empty line of `listing` and resolve each of them.
///
/// Lines that do not resolve are skipped with a warning.
pub fn resolve_list(listing: &Path) -> Result<Resolved> {
    let text = fs::read_to_string(listing).map_err(|e| Error::io(listing, e))?;

    let mut sources = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match resolve(line) {
            Ok(resolved) => sources.extend(resolved.sources),
            Err(err) => warn!("skipping {line:?}: {err}"),
        }
    }
    if sources.is_empty() {
        return Err(Error::NoInputFiles(listing.to_path_buf()));
    }

    Ok(Resolved { sources, target: last_component(listing) })
}

/// A bounded batch of raw lines; the unit handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub lines: Vec<String>,
}

/// Splits loaded text into [`TextChunk`]s of at most `batch_lines` lines.
pub struct ChunkReader<'a> {
    lines: std::str::Lines<'a>,
    batch_lines: usize,
}

impl<'a> ChunkReader<'a> {
    pub fn new(text: &'a str, batch_lines: usize) -> Self {
        ChunkReader { lines: text.lines(), batch_lines: batch_lines.max(1) }
    }
}

impl Iterator for ChunkReader<'_> {
    type Item = TextChunk;

    fn next(&mut self) -> Option<TextChunk> {
        let lines: Vec<String> = self.lines.by_ref().take(self.batch_lines).map(str::to_string).collect();
        if lines.is_empty() { None } else { Some(TextChunk { lines }) }
    }
}
