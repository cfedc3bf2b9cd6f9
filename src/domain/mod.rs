//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (filesystem, terminal, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, OutputConfig, PreviewConfig};
pub use error::{AppError, Result};
pub use models::{ArtifactKind, CleanedSequence, ExportArtifact, ExtractionStats};
