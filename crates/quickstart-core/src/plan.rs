//! Install plan: packages and files derived from an answer record
//!
//! Pure and side-effect free. Packages are added in a fixed precedence
//! (styling, linting, routing, state, icons, networking) so the install
//! commands come out identical for identical answers.

use crate::answers::{AnswerRecord, StateManagement};
use crate::error::SetupError;
use crate::templates::{self, EslintConfig};

const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/vite"];

const ESLINT_PACKAGES: &[&str] = &[
    "eslint",
    "eslint-config-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-react-refresh",
];

const ESLINT_TS_PACKAGES: &[&str] = &["@typescript-eslint/eslint-plugin", "@typescript-eslint/parser"];

const ROUTER_PACKAGE: &str = "react-router-dom";
const ROUTER_TYPES_PACKAGE: &str = "@types/react-router-dom";

const ZUSTAND_PACKAGES: &[&str] = &["zustand"];
const REDUX_PACKAGES: &[&str] = &["@reduxjs/toolkit", "react-redux"];

const ICONS_PACKAGE: &str = "lucide-react";
const AXIOS_PACKAGE: &str = "axios";

/// A file to (over)write, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    pub path: String,
    pub content: String,
}

impl FileWrite {
    fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ordered package lists and file writes for one project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub files: Vec<FileWrite>,
}

impl InstallPlan {
    /// Derive the plan from the user's answers
    pub fn from_answers(answers: &AnswerRecord) -> Result<Self, SetupError> {
        let mut plan = InstallPlan::default();
        let language = answers.language();

        // Packages
        if answers.use_tailwind {
            plan.add_dev(TAILWIND_PACKAGES);
        }

        if answers.use_eslint {
            plan.add_dev(ESLINT_PACKAGES);
            if answers.use_typescript {
                plan.add_dev(ESLINT_TS_PACKAGES);
            }
        }

        if answers.use_router {
            plan.add(&[ROUTER_PACKAGE]);
            if answers.use_typescript {
                plan.add_dev(&[ROUTER_TYPES_PACKAGE]);
            }
        }

        match answers.state_management {
            StateManagement::None => {}
            StateManagement::Zustand => plan.add(ZUSTAND_PACKAGES),
            StateManagement::ReduxToolkit => plan.add(REDUX_PACKAGES),
        }

        if answers.use_icons {
            plan.add(&[ICONS_PACKAGE]);
        }

        if answers.use_axios {
            plan.add(&[AXIOS_PACKAGE]);
        }

        // Files
        if answers.use_tailwind {
            plan.files
                .push(FileWrite::new("tailwind.config.js", templates::tailwind_config()));
            plan.files.push(FileWrite::new(
                format!("vite.config.{}", language.module_ext()),
                templates::vite_config(),
            ));
        }
        plan.files.push(FileWrite::new(
            "src/index.css",
            templates::index_css(answers.use_tailwind),
        ));

        if answers.use_eslint {
            let path = ".eslintrc.json";
            let content = EslintConfig::new(answers.use_typescript)
                .to_json()
                .map_err(|source| SetupError::Render {
                    path: path.to_string(),
                    source,
                })?;
            plan.files.push(FileWrite::new(path, content));
        }

        plan.files.push(FileWrite::new(
            entry_point_path(answers),
            templates::app_component(language, answers.use_router),
        ));

        Ok(plan)
    }

    /// Look up a planned file by its relative path
    pub fn file(&self, path: &str) -> Option<&FileWrite> {
        self.files.iter().find(|f| f.path == path)
    }

    fn add(&mut self, packages: &[&str]) {
        push_unique(&mut self.dependencies, packages);
    }

    fn add_dev(&mut self, packages: &[&str]) {
        push_unique(&mut self.dev_dependencies, packages);
    }
}

/// Relative path of the entry component (`src/App.tsx` or `src/App.jsx`)
pub fn entry_point_path(answers: &AnswerRecord) -> String {
    format!("src/App.{}", answers.language().component_ext())
}

fn push_unique(list: &mut Vec<String>, packages: &[&str]) {
    for package in packages {
        if !list.iter().any(|p| p == package) {
            list.push(package.to_string());
        }
    }
}
