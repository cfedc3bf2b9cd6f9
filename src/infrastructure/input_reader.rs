//! Input file reading.
//!
//! The upload collaborator in this tool is the filesystem: the raw
//! bytes of the user's table are read whole and handed to the extractor
//! untouched.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Result};

/// Reads the raw bytes of an input table file.
///
/// No decoding happens here; UTF-8 validation belongs to the extractor
/// so that encoding failures surface through the error taxonomy.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::io(format!("Failed to read input file: {}", path.display()), e))?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(bytes)
}
