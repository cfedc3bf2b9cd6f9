//! Export rendering for cleaned phone numbers.
//!
//! All renderings derive from one already-computed [`CleanedSequence`];
//! nothing here re-runs extraction. The render operations are total: they
//! cannot fail for any well-formed sequence.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ArtifactKind, CleanedSequence, ExportArtifact, ExtractionStats};

/// Header label for the columnar export.
pub const COLUMN_HEADER: &str = "Telefono_Limpio";

/// Download filename for the columnar export.
pub const COLUMNAR_FILENAME: &str = "telefonos_limpios_columna.csv";

/// Download filename for the comma-joined export.
pub const JOINED_FILENAME: &str = "telefonos_limpios_comas.txt";

/// Which artifacts to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Both the columnar CSV and the comma-joined text file.
    #[default]
    Both,
    /// Only the columnar CSV.
    Columnar,
    /// Only the comma-joined text file.
    Joined,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" => Ok(Self::Both),
            "columnar" | "csv" => Ok(Self::Columnar),
            "joined" | "comas" | "txt" => Ok(Self::Joined),
            _ => Err(format!("Unknown format: {s}. Use: both, columnar, joined")),
        }
    }
}

/// Renders the vertical one-number-per-row table, header included.
///
/// Every value is digit-only, so no quoting or escaping can ever be
/// needed; the output round-trips through any CSV reader.
#[must_use]
pub fn render_columnar(seq: &CleanedSequence) -> Vec<u8> {
    let mut out = String::with_capacity(COLUMN_HEADER.len() + 1 + seq.len() * 12);
    out.push_str(COLUMN_HEADER);
    out.push('\n');

    for number in seq {
        out.push_str(number);
        out.push('\n');
    }

    out.into_bytes()
}

/// Renders the single-line comma-joined representation.
///
/// No trailing separator; an empty sequence yields empty bytes.
#[must_use]
pub fn render_joined(seq: &CleanedSequence) -> Vec<u8> {
    seq.as_slice().join(",").into_bytes()
}

/// Returns the first `limit` cleaned numbers for display.
///
/// Never mutates or truncates the underlying sequence; a short sequence
/// is returned whole.
#[must_use]
pub fn render_preview(seq: &CleanedSequence, limit: usize) -> &[String] {
    let numbers = seq.as_slice();
    &numbers[..limit.min(numbers.len())]
}

/// Builds the columnar CSV artifact.
#[must_use]
pub fn columnar_artifact(seq: &CleanedSequence) -> ExportArtifact {
    ExportArtifact {
        filename: COLUMNAR_FILENAME,
        mime_type: "text/csv",
        kind: ArtifactKind::TabularWithHeader,
        bytes: render_columnar(seq),
    }
}

/// Builds the comma-joined flat-text artifact.
#[must_use]
pub fn joined_artifact(seq: &CleanedSequence) -> ExportArtifact {
    ExportArtifact {
        filename: JOINED_FILENAME,
        mime_type: "text/plain",
        kind: ArtifactKind::FlatText,
        bytes: render_joined(seq),
    }
}

/// Formats a preview slice as a terminal table.
#[must_use]
pub fn format_preview_table(numbers: &[String]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", COLUMN_HEADER]);

    for (i, number) in numbers.iter().enumerate() {
        table.add_row(vec![&(i + 1).to_string(), number]);
    }

    table.to_string()
}

/// Formats extraction statistics for display.
#[must_use]
pub fn format_stats(stats: &ExtractionStats) -> String {
    format!(
        "{}\n  Rows scanned: {}\n  Numbers kept: {}\n  Cells discarded: {}",
        "Statistics".bold(),
        stats.rows_scanned.to_string().cyan(),
        stats.numbers_kept.to_string().green(),
        stats.cells_discarded.to_string().yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::extractor::extract;

    fn sequence(numbers: &[&str]) -> CleanedSequence {
        CleanedSequence::from_cleaned(numbers.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_render_columnar_round_trips() {
        let seq = sequence(&["5551234567", "18005551212", "5551234567"]);
        let bytes = render_columnar(&seq);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());
        let parsed: Vec<String> = reader
            .records()
            .map(|r| r.unwrap().get(0).unwrap().to_string())
            .collect();

        assert_eq!(parsed, seq.as_slice());
    }

    #[test]
    fn test_render_columnar_empty_sequence_is_header_only() {
        let bytes = render_columnar(&sequence(&[]));
        assert_eq!(bytes, b"Telefono_Limpio\n");
    }

    #[test]
    fn test_columnar_export_re_extracts_to_same_sequence() {
        let seq = sequence(&["600112233445", "123456789"]);
        let re_extracted = extract(&render_columnar(&seq)).unwrap();
        assert_eq!(re_extracted, seq);
    }

    #[test]
    fn test_render_joined_separator_placement() {
        assert_eq!(render_joined(&sequence(&[])), b"");
        assert_eq!(render_joined(&sequence(&["123456789"])), b"123456789");
        assert_eq!(
            render_joined(&sequence(&["123456789", "987654321"])),
            b"123456789,987654321"
        );
    }

    #[test]
    fn test_render_joined_splits_back() {
        let seq = sequence(&["5551234567", "18005551212"]);
        let joined = String::from_utf8(render_joined(&seq)).unwrap();
        let split: Vec<&str> = joined.split(',').collect();
        assert_eq!(split, seq.as_slice());
    }

    #[test]
    fn test_render_preview_bounds() {
        let seq = sequence(&["111111111", "222222222", "333333333"]);
        assert_eq!(render_preview(&seq, 2).len(), 2);
        assert_eq!(render_preview(&seq, 10).len(), 3);
        assert_eq!(render_preview(&seq, 0).len(), 0);
        // Underlying sequence untouched.
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_artifact_metadata() {
        let seq = sequence(&["123456789"]);

        let columnar = columnar_artifact(&seq);
        assert_eq!(columnar.filename, "telefonos_limpios_columna.csv");
        assert_eq!(columnar.mime_type, "text/csv");
        assert_eq!(columnar.kind, ArtifactKind::TabularWithHeader);

        let joined = joined_artifact(&seq);
        assert_eq!(joined.filename, "telefonos_limpios_comas.txt");
        assert_eq!(joined.mime_type, "text/plain");
        assert_eq!(joined.kind, ArtifactKind::FlatText);
    }

    #[test]
    fn test_export_format_from_str() {
        assert!(matches!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both)));
        assert!(matches!(
            "columnar".parse::<ExportFormat>(),
            Ok(ExportFormat::Columnar)
        ));
        assert!(matches!(
            "joined".parse::<ExportFormat>(),
            Ok(ExportFormat::Joined)
        ));
        assert!("invalid".parse::<ExportFormat>().is_err());
    }
}
