// ABOUTME: The read -> rewrite -> write pipeline over a pair of files.
// ABOUTME: Provides run, read_document, write_document, and the Summary of a successful run.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::RelativizeError;
use crate::options::Options;
use crate::rewrite::Relativizer;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rewritten: usize,
}

/// Reads the whole document as UTF-8.
pub fn read_document(path: &Path) -> Result<String, RelativizeError> {
    fs::read_to_string(path).map_err(|e| RelativizeError::read(path, e))
}

/// Creates or truncates `path` and writes `content` to it.
///
/// Not atomic: a failure part way leaves the file in whatever state the
/// write reached.
pub fn write_document(path: &Path, content: &str) -> Result<(), RelativizeError> {
    fs::write(path, content).map_err(|e| RelativizeError::write(path, e))
}

/// Reads `options.input`, rewrites root-relative paths, and writes
/// `options.output`. Nothing is written when the read fails.
pub fn run(options: &Options) -> Result<Summary, RelativizeError> {
    let html = read_document(&options.input)?;
    debug!("read {} bytes from {}", html.len(), options.input.display());

    let relativizer = Relativizer::new(options.quote_mode);
    let rewrite = relativizer.convert(&html);
    debug!(
        "rewrote {} path(s) using {} quote pairing",
        rewrite.rewritten,
        relativizer.mode()
    );

    write_document(&options.output, &rewrite.content)?;
    debug!(
        "wrote {} bytes to {}",
        rewrite.content.len(),
        options.output.display()
    );

    Ok(Summary {
        input: options.input.clone(),
        output: options.output.clone(),
        rewritten: rewrite.rewritten,
    })
}
