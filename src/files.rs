//! Plain file reads and writes.
//!
//! Every function here propagates its failure; the exit-policy variants live
//! on [`crate::loader::Loader`]. I/O failures keep the underlying
//! [`std::io::Error`] downcastable and name the file in their message.
//!
//! Text is read with universal newlines: `\r\n` and a lone `\r` both become
//! `\n`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the whole file with newlines normalized to `\n`
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(normalize_newlines(&content))
}

/// Read the whole file and trim leading/trailing whitespace
pub fn read_trimmed(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    Ok(read_text(path)?.trim().to_string())
}

/// Read the file as lines, each ending in `\n`.
///
/// A final line without a terminator is returned as-is.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    debug!("Reading lines of {}", path.display());
    let content = read_text(path)?;
    Ok(content.split_inclusive('\n').map(str::to_string).collect())
}

/// Write `content` as the entire file, creating missing parent directories
pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating directory {}", parent.display());
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

/// Replace `\r\n` and lone `\r` with `\n`
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
