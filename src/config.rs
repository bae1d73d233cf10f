//! Configuration file support.
//!
//! Every field has a default, so an empty file (or no file at all) is valid.
//! Command-line flags are applied on top of whatever was loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io::Encoding;
use crate::{Mode, Options};

/// Runtime configuration for the file and URL drivers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spell out numerals, dates, clock times and years.
    pub extended: bool,
    /// Lines per chunk handed to the pipeline.
    pub batch_lines: usize,
    /// Directory under which `tokensN.txt` files are written.
    pub output_root: PathBuf,
    /// Decoding for local files.
    pub encoding: EncodingSetting,
    /// Flush the output file after this many chunks.
    pub flush_every: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EncodingSetting {
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[default]
    #[serde(rename = "legacy")]
    Legacy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extended: false,
            batch_lines: 100,
            output_root: PathBuf::from("token_files"),
            encoding: EncodingSetting::Legacy,
            flush_every: 50,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let mut config: Config =
            toml::from_str(text).map_err(|source| Error::Config { path: origin.to_path_buf(), source })?;
        config.batch_lines = config.batch_lines.max(1);
        config.flush_every = config.flush_every.max(1);
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text, path)
    }

    pub fn options(&self) -> Options {
        Options { mode: if self.extended { Mode::Extended } else { Mode::Basic } }
    }

    pub fn encoding(&self) -> Encoding {
        match self.encoding {
            EncodingSetting::Utf8 => Encoding::Utf8,
            EncodingSetting::Legacy => Encoding::legacy(),
        }
    }
}
