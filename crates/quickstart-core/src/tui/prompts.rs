//! Charm-style CLI prompts using cliclack

use crate::answers::AnswerRecord;
use crate::error::SetupError;
use crate::files::{DryRunWriter, FsWriter};
use crate::product::ProductConfig;
use crate::runtime::check;
use crate::runtime::command::{DryRunRunner, SystemRunner};
use crate::schema::{self, QuestionKind, QUESTIONS};
use crate::setup::{Setup, Summary};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; skips the name prompt
    pub project_name: Option<String>,

    /// YAML answers file; skips all prompts
    pub answers_file: Option<PathBuf>,

    /// Accept every default (non-interactive mode)
    pub yes: bool,

    /// Print the commands and files instead of running / writing them
    pub dry_run: bool,

    /// Skip the Node.js / package manager check
    pub skip_check: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<Summary> {
    cliclack::intro(config.display_name())?;

    // Step 1: Collect answers
    let answers = collect_answers(&args)?;

    // Step 2: Guard against an existing directory
    let base_dir = std::env::current_dir().context("Failed to read the current directory")?;
    confirm_directory(&base_dir.join(&answers.project_name), &args)?;

    // Step 3: Check toolchain
    if args.skip_check {
        cliclack::log::info("Skipping toolchain check")?;
    } else if !args.dry_run {
        check_toolchain(config)?;
    }

    // Step 4: Create project
    let result = if args.dry_run {
        cliclack::log::info("Dry run: nothing will be executed or written")?;
        Setup::new(config, DryRunRunner, DryRunWriter, base_dir)
            .run(&answers)
            .await
    } else {
        Setup::new(config, SystemRunner, FsWriter, base_dir)
            .run(&answers)
            .await
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            cliclack::outro_cancel("Setup failed")?;
            return Err(e.into());
        }
    };

    // Step 5: Show summary and next steps
    print_summary(&summary)?;

    Ok(summary)
}

fn collect_answers(args: &CreateArgs) -> Result<AnswerRecord> {
    // Reject a bad name argument before asking anything else
    if let Some(name) = &args.project_name {
        schema::validate_project_name(name).map_err(SetupError::InvalidProjectName)?;
    }

    let mut answers = if let Some(path) = &args.answers_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let answers = AnswerRecord::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        cliclack::log::info(format!("Using answers from {}", path.display()))?;
        answers
    } else if args.yes {
        cliclack::log::info("Using default answers (--yes mode)")?;
        AnswerRecord::from_schema_defaults().context("Failed to build default answers")?
    } else {
        prompt_answers(args.project_name.as_deref())?
    };

    if let Some(name) = &args.project_name {
        answers.project_name = name.clone();
    }

    // Non-interactive input never went through the prompt validator
    answers.validate()?;

    Ok(answers)
}

/// Ask every schema question in order and assemble the record
fn prompt_answers(preset_name: Option<&str>) -> Result<AnswerRecord> {
    let mut values = serde_json::Map::new();

    for question in QUESTIONS {
        if let (schema::PROJECT_NAME, Some(name)) = (question.key, preset_name) {
            cliclack::log::info(format!("Using project name: {}", name))?;
            values.insert(question.key.to_string(), serde_json::Value::from(name));
            continue;
        }

        let value = match question.kind {
            QuestionKind::Text { default } => {
                let q = *question;
                let input: String = cliclack::input(question.message)
                    .placeholder(default)
                    .default_input(default)
                    .validate(move |input: &String| q.validate(input))
                    .interact()?;
                serde_json::Value::from(input)
            }
            QuestionKind::Confirm { default } => {
                let confirmed: bool = cliclack::confirm(question.message)
                    .initial_value(default)
                    .interact()?;
                serde_json::Value::from(confirmed)
            }
            QuestionKind::Select { choices } => {
                let mut select = cliclack::select(question.message);
                for choice in choices {
                    select = select.item(choice.value, choice.label, "");
                }
                let selected: &str = select.interact()?;
                serde_json::Value::from(selected)
            }
        };
        values.insert(question.key.to_string(), value);
    }

    serde_json::from_value(serde_json::Value::Object(values)).context("Failed to read answers")
}

fn confirm_directory(path: &Path, args: &CreateArgs) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if !path.is_dir() {
        anyhow::bail!("{} exists and is not a directory", path.display());
    }

    let count = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .count();
    if count == 0 {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} already exists and has {} items",
        path.display(),
        count
    ))?;

    // Auto-confirm with --yes flag
    let confirm = if args.yes {
        true
    } else {
        cliclack::confirm("Continue anyway?")
            .initial_value(false)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(())
}

fn check_toolchain<C: ProductConfig>(config: &C) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check::check_toolchain(config.package_manager()) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected: {}", runtime_info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing toolchain");
            Err(e.context("Please install the missing tools and try again"))
        }
    }
}

fn print_summary(summary: &Summary) -> Result<()> {
    if summary.features.is_empty() {
        cliclack::log::success("Setup completed with the base template")?;
    } else {
        cliclack::log::success(format!(
            "Setup completed with: {}",
            summary.features.join(", ")
        ))?;
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in summary.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
