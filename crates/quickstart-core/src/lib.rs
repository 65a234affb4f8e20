//! Quickstart Core - Shared library for React starter scaffolding
//!
//! This library collects project preferences, drives an external package
//! manager and project generator to create a Vite + React app, and then
//! writes a handful of templated configuration and source files into it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Data** - Prompt schema, answer record, and the pure
//!   answers-to-[`InstallPlan`] derivation with its file templates
//! - **Layer 2: Workflow Orchestration** - [`Setup`] drives a [`CommandRunner`]
//!   and a [`FileWriter`]; [`ProductConfig`] names the toolchain
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use quickstart_core::{AnswerRecord, FsWriter, Setup, SystemRunner};
//!
//! let answers = AnswerRecord { project_name: "demo".into(), ..Default::default() };
//! let summary = Setup::new(&MyConfig, SystemRunner, FsWriter, ".")
//!     .run(&answers)
//!     .await?;
//! ```

pub mod answers;
pub mod error;
pub mod exit;
pub mod files;
pub mod plan;
pub mod product;
pub mod runtime;
pub mod schema;
pub mod setup;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerRecord, Language, StateManagement};
pub use error::SetupError;
pub use files::{DryRunWriter, FileWriter, FsWriter};
pub use plan::{FileWrite, InstallPlan};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, DryRunRunner, Invocation, SystemRunner};
pub use setup::{Setup, Summary};

#[cfg(feature = "tui")]
pub use tui::run;
