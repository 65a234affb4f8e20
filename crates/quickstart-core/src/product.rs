//! Product configuration trait for CLI binaries
//!
//! This trait defines the toolchain a binary drives and the instructions it
//! prints once a project has been created.

use crate::answers::AnswerRecord;

/// Configuration trait for scaffolding products
///
/// Each binary implements this trait to define:
/// - Product identity (display name, help text)
/// - The package manager, the `create` package it scaffolds with, and the
///   dev server command
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Package manager binary (e.g., "npm")
    fn package_manager(&self) -> &'static str;

    /// Package passed to `<package manager> create` (e.g., "vite@latest")
    fn scaffold_package(&self) -> &'static str;

    /// Command that starts the dev server in a created project
    fn dev_command(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, answers: &AnswerRecord) -> Vec<String>;
}
