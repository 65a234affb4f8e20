//! Error types for the setup workflow

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while setting up a project
///
/// Input validation during prompting never produces one of these; the prompt
/// re-asks instead. Everything here aborts the run.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Project name failed validation (empty or outside `[A-Za-z0-9-_]`)
    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    /// External command failed to spawn or exited non-zero
    #[error("Command `{command}` failed: {message}")]
    Command { command: String, message: String },

    /// A generated file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be rendered
    #[error("Failed to render {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SetupError {
    pub fn command(command: impl ToString, message: impl ToString) -> Self {
        SetupError::Command {
            command: command.to_string(),
            message: message.to_string(),
        }
    }
}
