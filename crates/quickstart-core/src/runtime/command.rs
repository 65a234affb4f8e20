//! Subprocess runner for the scaffolder and the package manager
//!
//! Commands are spawned directly with an argument vector, never through a
//! shell, and inherit the terminal so the user sees live output.

use crate::error::SetupError;
use async_trait::async_trait;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A single external command and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command and wait for it to exit. Spawn failures and non-zero
    /// exits are both errors carrying the command string.
    async fn run(&self, invocation: &Invocation) -> Result<(), SetupError>;
}

/// Runs commands on the host, streaming their output to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<(), SetupError> {
        println!();
        println!("{} {}", "Running:".dimmed(), invocation.to_string().yellow());
        println!();

        // No timeout: a hung command is only interrupted by a signal
        let status = TokioCommand::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| SetupError::command(invocation, format!("failed to start: {}", e)))?;

        if status.success() {
            Ok(())
        } else {
            let message = match status.code() {
                Some(code) => format!("exited with code {}", code),
                None => "terminated by a signal".to_string(),
            };
            Err(SetupError::command(invocation, message))
        }
    }
}

/// Prints commands instead of running them (`--dry-run`)
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, invocation: &Invocation) -> Result<(), SetupError> {
        println!(
            "  {} {} {}",
            "Would run:".dimmed(),
            invocation.to_string().yellow(),
            format!("(in {})", invocation.cwd.display()).dimmed()
        );
        Ok(())
    }
}
