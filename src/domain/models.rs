//! Domain models for the phone-number cleaning pipeline.
//!
//! A cleaned number is a digit-only string with strictly more than 8
//! digits; anything shorter is treated as noise (name fragments, codes,
//! partial data) and discarded during extraction.

use serde::Serialize;

/// An ordered sequence of cleaned phone numbers.
///
/// Every element contains only ASCII decimal digits and is at least 9
/// digits long. Order matches the relative order of the source rows, and
/// duplicates from the source are preserved verbatim. The sequence is
/// immutable once produced; all exports derive from the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedSequence(Vec<String>);

impl CleanedSequence {
    /// Wraps already-validated numbers. Callers must only pass strings
    /// that satisfy the digit-only, length > 8 invariant.
    pub(crate) fn from_cleaned(numbers: Vec<String>) -> Self {
        Self(numbers)
    }

    /// Number of cleaned entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no source cell passed the length filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cleaned numbers, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

}

impl<'a> IntoIterator for &'a CleanedSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Content kind of an export artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactKind {
    /// Delimited table with a header row, one number per data row.
    TabularWithHeader,
    /// Single line of comma-joined numbers.
    FlatText,
}

/// A named byte payload derived from a [`CleanedSequence`].
///
/// Artifacts carry no identity of their own; they can be regenerated
/// from the sequence at any time.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Download filename for this artifact.
    pub filename: &'static str,
    /// MIME type offered to the download collaborator.
    pub mime_type: &'static str,
    /// Content kind label.
    pub kind: ArtifactKind,
    /// UTF-8 encoded payload.
    pub bytes: Vec<u8>,
}

/// Summary statistics for one extraction run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ExtractionStats {
    /// Data rows read from the input table (header excluded).
    pub rows_scanned: usize,
    /// Cells that passed the length filter.
    pub numbers_kept: usize,
    /// Cells discarded for having 8 or fewer digits (including zero).
    pub cells_discarded: usize,
}
