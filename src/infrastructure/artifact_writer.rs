//! Export artifact writer.
//!
//! Writes generated artifacts into an output directory under their
//! canonical download filenames.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ExportArtifact, Result};

/// Writes export artifacts to a target directory.
pub struct ArtifactWriter {
    out_dir: PathBuf,
}

impl ArtifactWriter {
    /// Creates a writer targeting `out_dir`. The directory is created
    /// lazily on first write.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Writes one artifact, returning the path it landed at.
    ///
    /// # Errors
    /// Returns error if the directory or file cannot be written.
    pub fn write(&self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir).map_err(|e| {
            AppError::io(
                format!("Failed to create output directory {}", self.out_dir.display()),
                e,
            )
        })?;

        let path = self.out_dir.join(artifact.filename);
        fs::write(&path, &artifact.bytes)
            .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

        tracing::info!(
            "Wrote {} ({} bytes, {}, {:?})",
            path.display(),
            artifact.bytes.len(),
            artifact.mime_type,
            artifact.kind
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtifactKind;
    use tempfile::tempdir;

    fn artifact() -> ExportArtifact {
        ExportArtifact {
            filename: "telefonos_limpios_comas.txt",
            mime_type: "text/plain",
            kind: ArtifactKind::FlatText,
            bytes: b"123456789,987654321".to_vec(),
        }
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path().join("exports"));

        let path = writer.write(&artifact()).unwrap();

        assert_eq!(
            path,
            dir.path().join("exports").join("telefonos_limpios_comas.txt")
        );
        assert_eq!(fs::read(&path).unwrap(), b"123456789,987654321");
    }

    #[test]
    fn test_write_overwrites_existing_artifact() {
        let dir = tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path());

        writer.write(&artifact()).unwrap();
        let mut updated = artifact();
        updated.bytes = b"600112233445".to_vec();
        let path = writer.write(&updated).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"600112233445");
    }
}
