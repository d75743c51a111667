//! Text-level patching of the `"version"` field in JSON-like files.
//!
//! The files are never parsed as JSON, so formatting, key order and
//! whitespace survive a rewrite byte for byte.

use regex::bytes::Regex;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{BumpError, Result};

// Byte-level so files that are not valid UTF-8 are patched as-is.
fn version_field() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""version": "((?-u:[^"])+)""#).expect("version field pattern is valid")
    })
}

/// Byte range of the first version field's value
fn first_value(content: &[u8]) -> Option<Range<usize>> {
    version_field()
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|value| value.range())
}

fn splice(content: &[u8], value: Range<usize>, new_version: &str) -> Vec<u8> {
    let mut patched = Vec::with_capacity(content.len() + new_version.len());
    patched.extend_from_slice(&content[..value.start]);
    patched.extend_from_slice(new_version.as_bytes());
    patched.extend_from_slice(&content[value.end..]);
    patched
}

/// Value of the first `"version": "<value>"` occurrence
pub fn extract_version(content: &str) -> Option<&str> {
    // The value is delimited by ASCII quotes, so the range falls on char boundaries.
    first_value(content.as_bytes()).map(|value| &content[value])
}

/// Replace the value of the first version field, leaving everything else intact.
///
/// Returns `None` when the content has no version field.
pub fn replace_first_version(content: &str, new_version: &str) -> Option<String> {
    let value = first_value(content.as_bytes())?;
    String::from_utf8(splice(content.as_bytes(), value, new_version)).ok()
}

/// Read a file and return its current version
pub fn read_current_version(path: &Path) -> Result<String> {
    let content = read(path)?;
    first_value(&content)
        .map(|value| String::from_utf8_lossy(&content[value]).into_owned())
        .ok_or_else(|| BumpError::VersionFieldNotFound {
            path: path.to_path_buf(),
        })
}

/// Patched file content held in memory until it is written
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPatch {
    pub path: PathBuf,
    pub previous_version: String,
    content: Vec<u8>,
}

impl PendingPatch {
    /// The full content that will be written
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Overwrite the file with the patched content
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.content).map_err(|e| BumpError::file_write(&self.path, e))
    }
}

/// Read a file and compute its patched content without writing it
pub fn prepare_patch(path: &Path, new_version: &str) -> Result<PendingPatch> {
    let content = read(path)?;
    let value = first_value(&content).ok_or_else(|| BumpError::VersionFieldNotFound {
        path: path.to_path_buf(),
    })?;

    Ok(PendingPatch {
        path: path.to_path_buf(),
        previous_version: String::from_utf8_lossy(&content[value.clone()]).into_owned(),
        content: splice(&content, value, new_version),
    })
}

/// Set the first version field of a file to `new_version`
pub fn apply_version(path: &Path, new_version: &str) -> Result<()> {
    prepare_patch(path, new_version)?.write()
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| BumpError::file_read(path, e))
}
