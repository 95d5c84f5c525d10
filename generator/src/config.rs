//! Configuration types for the generator
//!
//! Defines the configuration structure shared by the CLI and the
//! runner.

use std::path::PathBuf;

use manifest_kit::validator::Strictness;

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Path to the TOML element set describing the annotated elements
    pub element_set: PathBuf,

    /// Directory the manifest is written into
    pub output_dir: PathBuf,

    /// Content-validation policy for the pass
    pub strictness: Strictness,

    /// Suppress console output
    pub quiet: bool,
}

impl GenConfig {
    pub fn new(element_set: PathBuf) -> Self {
        Self {
            element_set,
            output_dir: PathBuf::from("."),
            strictness: Strictness::default(),
            quiet: false,
        }
    }
}
