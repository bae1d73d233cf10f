//! Glue the text files of one directory into a single file.
//!
//! Bytes are copied as they are, so the result keeps whatever encoding the
//! inputs had; decoding happens later when the united file is tokenized.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};

/// What [`connect`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectReport {
    pub output: PathBuf,
    pub appended: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

fn is_connectable(name: &str) -> bool {
    name.contains('.') && !name.contains(".py")
}

fn default_output(dir: &Path) -> PathBuf {
    let mut n = 0usize;
    loop {
        let path = dir.join(format!("unitedFiles_{n:04}.txt"));
        if !path.exists() {
            return path;
        }
        n += 1;
    }
}

/// Concatenate every connectable file in `dir` (default: the current
/// directory) into `output`, separated by one space.
///
/// A bare file name for `output` is placed inside `dir`. Without `output` the
/// first free `unitedFiles_NNNN.txt` is used. An existing explicit output is
/// refused rather than overwritten.
pub fn connect(dir: Option<&Path>, output: Option<&Path>) -> Result<ConnectReport> {
    let dir = dir.unwrap_or(Path::new("."));
    let output = match output {
        Some(out) if out.parent().is_none_or(|p| p.as_os_str().is_empty()) => dir.join(out),
        Some(out) => out.to_path_buf(),
        None => default_output(dir),
    };
    if output.exists() {
        return Err(Error::OutputExists(output));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if path.is_file() && is_connectable(&name) {
            inputs.push(path);
        }
    }
    inputs.sort();

    let mut united = Vec::new();
    let mut report = ConnectReport { output: output.clone(), appended: Vec::new(), skipped: Vec::new() };
    for path in inputs {
        match fs::read(&path) {
            Ok(bytes) => {
                if !report.appended.is_empty() {
                    united.push(b' ');
                }
                united.extend_from_slice(&bytes);
                info!("appended {}", path.display());
                report.appended.push(path);
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                report.skipped.push(path);
            }
        }
    }
    if report.appended.is_empty() {
        return Err(Error::NoInputFiles(dir.to_path_buf()));
    }

    let mut file = OpenOptions::new().write(true).create_new(true).open(&output).map_err(|e| Error::io(&output, e))?;
    file.write_all(&united).map_err(|e| Error::io(&output, e))?;
    Ok(report)
}
