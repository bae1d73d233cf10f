use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// One `tokensN.txt` output file.
///
/// Normalized chunks are appended separated by a single space, so the file
/// holds one long line of tokens with no trailing newline.
pub struct TokenFile {
    path: PathBuf,
    writer: BufWriter<File>,
    chunks: usize,
    flush_every: usize,
}

impl TokenFile {
    /// Open the first free `tokensN.txt` (N from 0) under `root[/target]`.
    pub fn create(root: &Path, target: Option<&str>, flush_every: usize) -> Result<Self> {
        let dir = match target {
            Some(target) => root.join(target),
            None => root.to_path_buf(),
        };
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let mut n = 0usize;
        loop {
            let path = dir.join(format!("tokens{n}.txt"));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    debug!("writing tokens to {}", path.display());
                    return Ok(TokenFile { path, writer: BufWriter::new(file), chunks: 0, flush_every: flush_every.max(1) });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(Error::io(path, e)),
            }
        }
    }

    /// Append one normalized chunk. Empty chunks are skipped.
    pub fn write_chunk(&mut self, tokens: &str) -> Result<()> {
        if tokens.is_empty() {
            return Ok(());
        }

        let result = if self.chunks > 0 {
            self.writer.write_all(b" ").and_then(|_| self.writer.write_all(tokens.as_bytes()))
        } else {
            self.writer.write_all(tokens.as_bytes())
        };
        result.map_err(|e| Error::io(&self.path, e))?;

        self.chunks += 1;
        if self.chunks % self.flush_every == 0 {
            self.writer.flush().map_err(|e| Error::io(&self.path, e))?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Flush and close, returning where the tokens went.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush().map_err(|e| Error::io(&self.path, e))?;
        Ok(self.path)
    }
}
