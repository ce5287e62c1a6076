use crate::error::ExportError;
use log::debug;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the pipeline expects exported values to be appended.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_file: Option<PathBuf>,
    pub secret_output_file: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            output_file: None,
            secret_output_file: None,
        }
    }

    /// Path for `target`. An unset path becomes the empty path, which fails to open.
    pub fn path_for(&self, target: OutputTarget) -> &Path {
        let path = match target {
            OutputTarget::General => self.output_file.as_deref(),
            OutputTarget::Secret => self.secret_output_file.as_deref(),
        };
        path.unwrap_or_else(|| Path::new(""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    General,
    Secret,
}

impl OutputTarget {
    pub fn select(secret: bool) -> Self {
        if secret {
            OutputTarget::Secret
        } else {
            OutputTarget::General
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::General => f.write_str("output file"),
            OutputTarget::Secret => f.write_str("secret output file"),
        }
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .append(true)
        .create(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}

/// Append one `key=value` line to the file behind `target`
///
/// The file is opened, written, flushed and closed within the call so the
/// line is visible to later pipeline steps as soon as this returns.
pub fn append_line(
    config: &Config,
    target: OutputTarget,
    key: &str,
    value: &str,
) -> Result<(), ExportError> {
    let path = config.path_for(target);
    debug!("Appending {} to {} {:?}", key, target, path);

    let mut file = open_append(path)
        .map_err(|err| ExportError::io(format!("failed to open {} {:?}", target, path), err))?;

    writeln!(file, "{}={}", key, value)
        .and_then(|_| file.flush())
        .map_err(|err| ExportError::io(format!("failed to write to {} {:?}", target, path), err))?;

    Ok(())
}
