//! Application configuration models.
//!
//! Presentation-layer defaults only; extraction behavior itself is fixed
//! and never configurable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for artifact output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where export artifacts are written.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

/// Configuration for the on-screen preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Number of cleaned numbers shown by the preview.
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            limit: default_preview_limit(),
        }
    }
}

const fn default_preview_limit() -> usize {
    10
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Artifact output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Preview configuration.
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl AppConfig {
    /// Get the default configuration directory path.
    #[must_use]
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phone-cleaner")
    }
}
