//! Setup orchestrator
//!
//! Drives a project from answers to a finished tree:
//!
//! 1. Re-validate the project name
//! 2. `<pm> create <scaffolder> <name> -- --template <variant>` in the base directory
//! 3. Switch the working context to `<base>/<name>`
//! 4. `<pm> install`
//! 5. Derive the [`InstallPlan`]
//! 6. `<pm> install <deps...>` then `<pm> install -D <dev deps...>`
//! 7. Write the planned files
//!
//! Every step is fatal on failure. Nothing is retried or rolled back; a
//! partially created project stays on disk for inspection.

use crate::answers::AnswerRecord;
use crate::error::SetupError;
use crate::files::FileWriter;
use crate::plan::InstallPlan;
use crate::product::ProductConfig;
use crate::runtime::command::{CommandRunner, Invocation};
use colored::Colorize;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Outcome of a successful setup
#[derive(Debug, Clone)]
pub struct Summary {
    pub project_name: String,
    pub project_dir: PathBuf,
    /// Optional features that were installed
    pub features: Vec<&'static str>,
    /// Packages installed on top of the template
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    /// Files written, relative to the project directory
    pub files: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Runs the setup steps through a command runner and a file writer
pub struct Setup<'a, C, R, W> {
    config: &'a C,
    runner: R,
    writer: W,
    base_dir: PathBuf,
}

impl<'a, C, R, W> Setup<'a, C, R, W>
where
    C: ProductConfig,
    R: CommandRunner,
    W: FileWriter,
{
    /// `base_dir` is where the project directory gets created
    pub fn new(config: &'a C, runner: R, writer: W, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            runner,
            writer,
            base_dir: base_dir.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub async fn run(&self, answers: &AnswerRecord) -> Result<Summary, SetupError> {
        answers.validate()?;

        let name = answers.project_name.as_str();
        println!(
            "{}",
            format!("Creating project: {} ({})", name, answers.language())
                .blue()
                .bold()
        );

        step(
            "Scaffolding project",
            self.runner.run(&self.scaffold_invocation(answers)),
        )
        .await?;

        // Everything below runs inside the new project
        let project_dir = self.base_dir.join(name);

        step(
            "Installing template dependencies",
            self.runner.run(&self.install_invocation(&project_dir, false, &[])),
        )
        .await?;

        let plan = InstallPlan::from_answers(answers)?;

        if !plan.dependencies.is_empty() {
            step(
                "Installing dependencies",
                self.runner
                    .run(&self.install_invocation(&project_dir, false, &plan.dependencies)),
            )
            .await?;
        }

        if !plan.dev_dependencies.is_empty() {
            step(
                "Installing dev dependencies",
                self.runner
                    .run(&self.install_invocation(&project_dir, true, &plan.dev_dependencies)),
            )
            .await?;
        }

        for file in &plan.files {
            let path = project_dir.join(&file.path);
            step(
                &format!("Writing {}", file.path),
                self.writer.write(&path, &file.content),
            )
            .await?;
        }

        Ok(Summary {
            project_name: name.to_string(),
            project_dir,
            features: answers.features(),
            dependencies: plan.dependencies,
            dev_dependencies: plan.dev_dependencies,
            files: plan.files.into_iter().map(|f| f.path).collect(),
            next_steps: self.config.next_steps(answers),
        })
    }

    /// `<pm> create <scaffolder> <name> -- --template <variant>`, run in the base directory
    pub fn scaffold_invocation(&self, answers: &AnswerRecord) -> Invocation {
        Invocation::new(self.config.package_manager(), &self.base_dir)
            .arg("create")
            .arg(self.config.scaffold_package())
            .arg(answers.project_name.as_str())
            .args(["--", "--template", answers.language().vite_template()])
    }

    /// `<pm> install [-D] [packages...]`, run in the project directory
    pub fn install_invocation(&self, project_dir: &Path, dev: bool, packages: &[String]) -> Invocation {
        let mut invocation = Invocation::new(self.config.package_manager(), project_dir).arg("install");
        if dev {
            invocation = invocation.arg("-D");
        }
        invocation.args(packages.iter().cloned())
    }
}

/// Announce a step and await it. Errors pass up untouched; they are reported
/// once, at the outermost boundary.
async fn step<F>(label: &str, fut: F) -> Result<(), SetupError>
where
    F: Future<Output = Result<(), SetupError>>,
{
    println!("{} {}", "->".blue(), label);
    fut.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::StateManagement;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn display_name(&self) -> &'static str {
            "Test"
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
            "Test scaffolder"
        }

        fn next_steps(&self, answers: &AnswerRecord) -> Vec<String> {
            vec![
                format!("cd {}", answers.project_name),
                self.dev_command().to_string(),
            ]
        }
    }

    /// Records invocations; fails the first one whose args start with `fail_on`
    #[derive(Default)]
    struct FakeRunner {
        calls: Mutex<Vec<Invocation>>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn failing_on(subcommand: &'static str) -> Self {
            Self {
                fail_on: Some(subcommand),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, invocation: &Invocation) -> Result<(), SetupError> {
            self.calls.lock().unwrap().push(invocation.clone());
            match self.fail_on {
                Some(sub) if invocation.args.first().map(String::as_str) == Some(sub) => {
                    Err(SetupError::command(invocation, "exited with code 1"))
                }
                _ => Ok(()),
            }
        }
    }

    /// Keeps written files in memory
    #[derive(Default)]
    struct MemoryWriter {
        files: Mutex<HashMap<PathBuf, String>>,
        order: Mutex<Vec<PathBuf>>,
    }

    impl MemoryWriter {
        fn get(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.lock().unwrap().get(path.as_ref()).cloned()
        }

        fn count(&self) -> usize {
            self.order.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FileWriter for MemoryWriter {
        async fn write(&self, path: &Path, content: &str) -> Result<(), SetupError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            self.order.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn scenario_a() -> AnswerRecord {
        AnswerRecord {
            project_name: "demo".to_string(),
            use_typescript: true,
            use_eslint: true,
            use_tailwind: true,
            use_router: true,
            state_management: StateManagement::Zustand,
            use_icons: true,
            use_axios: true,
        }
    }

    #[tokio::test]
    async fn test_scenario_all_features() {
        let setup = Setup::new(&TestConfig, FakeRunner::default(), MemoryWriter::default(), "/work");

        let summary = setup.run(&scenario_a()).await.unwrap();

        let calls = setup.runner().calls();
        let rendered: Vec<String> = calls.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "npm create vite@latest demo -- --template react-ts".to_string(),
                "npm install".to_string(),
                "npm install react-router-dom zustand lucide-react axios".to_string(),
                "npm install -D tailwindcss @tailwindcss/vite eslint eslint-config-prettier \
                 eslint-plugin-react eslint-plugin-react-hooks eslint-plugin-react-refresh \
                 @typescript-eslint/eslint-plugin @typescript-eslint/parser @types/react-router-dom"
                    .to_string(),
            ]
        );

        // Scaffold runs in the base directory, everything else in the project
        assert_eq!(calls[0].cwd, PathBuf::from("/work"));
        for call in &calls[1..] {
            assert_eq!(call.cwd, PathBuf::from("/work/demo"));
        }

        let app = setup.writer().get("/work/demo/src/App.tsx").unwrap();
        assert!(app.contains(r#"path="/about""#));
        assert!(setup.writer().get("/work/demo/tailwind.config.js").is_some());
        assert!(setup.writer().get("/work/demo/vite.config.ts").is_some());
        assert!(setup.writer().get("/work/demo/.eslintrc.json").is_some());

        assert_eq!(summary.project_dir, PathBuf::from("/work/demo"));
        assert_eq!(summary.next_steps, vec!["cd demo", "npm run dev"]);
        assert_eq!(
            summary.features,
            vec![
                "TypeScript",
                "ESLint",
                "Tailwind CSS",
                "React Router",
                "Zustand",
                "Lucide Icons",
                "Axios"
            ]
        );
    }

    #[tokio::test]
    async fn test_scenario_no_router_no_state() {
        let answers = AnswerRecord {
            use_router: false,
            state_management: StateManagement::None,
            ..scenario_a()
        };
        let setup = Setup::new(&TestConfig, FakeRunner::default(), MemoryWriter::default(), "/work");

        setup.run(&answers).await.unwrap();

        let calls = setup.runner().calls();
        assert_eq!(calls[2].args, vec!["install", "lucide-react", "axios"]);

        let app = setup.writer().get("/work/demo/src/App.tsx").unwrap();
        assert!(!app.contains("react-router-dom"));
        assert!(!app.contains("<Route"));
    }

    #[tokio::test]
    async fn test_scenario_scaffold_failure_stops_everything() {
        let setup = Setup::new(
            &TestConfig,
            FakeRunner::failing_on("create"),
            MemoryWriter::default(),
            "/work",
        );

        let err = setup.run(&scenario_a()).await.unwrap_err();

        match err {
            SetupError::Command { command, message } => {
                assert_eq!(command, "npm create vite@latest demo -- --template react-ts");
                assert_eq!(message, "exited with code 1");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(setup.runner().calls().len(), 1);
        assert_eq!(setup.writer().count(), 0);
    }

    #[tokio::test]
    async fn test_install_failure_skips_file_writes() {
        let setup = Setup::new(
            &TestConfig,
            FakeRunner::failing_on("install"),
            MemoryWriter::default(),
            "/work",
        );

        let err = setup.run(&scenario_a()).await.unwrap_err();

        assert!(err.to_string().contains("npm install"));
        assert_eq!(setup.runner().calls().len(), 2);
        assert_eq!(setup.writer().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_name_runs_nothing() {
        let answers = AnswerRecord {
            project_name: "demo; rm -rf /".to_string(),
            ..scenario_a()
        };
        let setup = Setup::new(&TestConfig, FakeRunner::default(), MemoryWriter::default(), "/work");

        let err = setup.run(&answers).await.unwrap_err();

        assert!(matches!(err, SetupError::InvalidProjectName(_)));
        assert!(setup.runner().calls().is_empty());
        assert_eq!(setup.writer().count(), 0);
    }

    #[tokio::test]
    async fn test_minimal_answers_skip_extra_installs() {
        let answers = AnswerRecord {
            project_name: "plain".to_string(),
            use_typescript: false,
            use_eslint: false,
            use_tailwind: false,
            use_router: false,
            state_management: StateManagement::None,
            use_icons: false,
            use_axios: false,
        };
        let setup = Setup::new(&TestConfig, FakeRunner::default(), MemoryWriter::default(), "/work");

        let summary = setup.run(&answers).await.unwrap();

        let rendered: Vec<String> = setup
            .runner()
            .calls()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "npm create vite@latest plain -- --template react",
                "npm install"
            ]
        );
        assert!(summary.features.is_empty());
        assert_eq!(summary.files, vec!["src/index.css", "src/App.jsx"]);
        assert!(setup.writer().get("/work/plain/tailwind.config.js").is_none());
        assert!(setup
            .writer()
            .get("/work/plain/src/index.css")
            .unwrap()
            .contains("margin: 0"));
    }

    #[tokio::test]
    async fn test_writes_into_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        let setup = Setup::new(
            &TestConfig,
            FakeRunner::default(),
            crate::files::FsWriter,
            dir.path(),
        );

        setup.run(&scenario_a()).await.unwrap();

        let project = dir.path().join("demo");
        assert!(project.join("src/App.tsx").is_file());
        assert!(project.join("src/index.css").is_file());
        assert!(project.join(".eslintrc.json").is_file());
        assert!(project.join("tailwind.config.js").is_file());
    }
}
