//! Application layer - use cases and orchestration.
//!
//! This layer contains the main business logic for extracting
//! and exporting cleaned phone numbers.

pub mod cache;
pub mod exporter;
pub mod extractor;

pub use cache::ExtractCache;
pub use exporter::{
    columnar_artifact, format_preview_table, format_stats, joined_artifact, render_columnar,
    render_joined, render_preview, ExportFormat,
};
pub use extractor::{extract, extract_with_stats, MIN_DIGITS};
