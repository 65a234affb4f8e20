//! Quickstart React - Interactive scaffolding for Vite + React projects

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use quickstart_core::tui::CreateArgs;
use quickstart_core::{AnswerRecord, ProductConfig};
use std::path::PathBuf;

/// React + Vite product configuration
#[derive(Clone)]
pub struct ReactQuickstart;

impl ProductConfig for ReactQuickstart {
    fn display_name(&self) -> &'static str {
        "Quickstart React Setup"
    }

    fn package_manager(&self) -> &'static str {
        "npm"
    }

    fn scaffold_package(&self) -> &'static str {
        "vite@latest"
    }

    fn dev_command(&self) -> &'static str {
        "npm run dev"
    }

    fn cli_description(&self) -> &'static str {
        "Interactive CLI for scaffolding React + Vite starter projects"
    }

    fn next_steps(&self, answers: &AnswerRecord) -> Vec<String> {
        vec![
            format!("cd {}", answers.project_name),
            self.dev_command().to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "quickstart-react")]
#[command(version)]
pub struct Args {
    /// Project name (skips the name prompt)
    pub name: Option<String>,

    /// YAML file with answers to every question (non-interactive mode)
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Accept all defaults and auto-confirm prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print the commands and files without running or writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the Node.js / npm installation check
    #[arg(long = "skip-check")]
    pub skip_check: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.name,
            answers_file: args.answers,
            yes: args.yes,
            dry_run: args.dry_run,
            skip_check: args.skip_check,
        }
    }
}

/// Parse the command line, taking the help text from the product config
fn parse_args<C, I, T>(config: &C, argv: I) -> Result<Args, clap::Error>
where
    C: ProductConfig,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = Args::command()
        .about(config.cli_description())
        .try_get_matches_from(argv)?;
    Args::from_arg_matches(&matches)
}

async fn run(config: &ReactQuickstart, args: Args) -> Result<()> {
    // SIGINT / SIGTERM / panics all end the process with status 1
    quickstart_core::exit::install_handlers().context("Failed to install signal handlers")?;

    quickstart_core::run(config, args.into()).await?;
    Ok(())
}

/// The single failure report printed before exiting
fn failure_message(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Setup failed:".red().bold(), error)
}

#[tokio::main]
async fn main() {
    let config = ReactQuickstart;
    let args = parse_args(&config, std::env::args_os()).unwrap_or_else(|e| e.exit());

    let result = run(&config, args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!();
        eprintln!("{}", failure_message(&e));
        eprintln!("{}", "You can re-run the command to start over.".yellow());
        std::process::exit(quickstart_core::exit::EXIT_FAILURE);
    }
}
