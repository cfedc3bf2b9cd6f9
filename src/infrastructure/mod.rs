//! Infrastructure layer - external adapters (filesystem, config).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod artifact_writer;
pub mod config;
pub mod input_reader;

pub use artifact_writer::ArtifactWriter;
pub use config::{ensure_config_exists, load_config, load_config_from_file};
pub use input_reader::read_input;
