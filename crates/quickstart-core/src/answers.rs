//! The answer record collected from the prompts (or an answers file)

use crate::error::SetupError;
use crate::schema::{self, QuestionKind, QUESTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language variant of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Vite template variant passed to `create vite`
    pub fn vite_template(&self) -> &'static str {
        match self {
            Language::TypeScript => "react-ts",
            Language::JavaScript => "react",
        }
    }

    /// Extension for component files (`App.tsx`)
    pub fn component_ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }

    /// Extension for plain modules (`vite.config.ts`)
    pub fn module_ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// State management library choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateManagement {
    #[default]
    #[serde(alias = "None")]
    None,
    #[serde(alias = "Zustand")]
    Zustand,
    #[serde(alias = "ReduxToolkit", alias = "redux")]
    ReduxToolkit,
}

impl StateManagement {
    /// Human-readable name, `None` when no library was chosen
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            StateManagement::None => None,
            StateManagement::Zustand => Some("Zustand"),
            StateManagement::ReduxToolkit => Some("Redux Toolkit"),
        }
    }
}

/// User choices for the project being created
///
/// Field names double as the prompt schema keys and the keys of a YAML
/// answers file. Keys missing from an answers file take the schema default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswerRecord {
    pub project_name: String,
    pub use_typescript: bool,
    pub use_eslint: bool,
    pub use_tailwind: bool,
    pub use_router: bool,
    pub state_management: StateManagement,
    pub use_icons: bool,
    pub use_axios: bool,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            project_name: schema::DEFAULT_PROJECT_NAME.to_string(),
            use_typescript: true,
            use_eslint: true,
            use_tailwind: true,
            use_router: true,
            state_management: StateManagement::None,
            use_icons: true,
            use_axios: true,
        }
    }
}

impl AnswerRecord {
    /// Parse an answers file
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Build a record from the schema defaults alone
    pub fn from_schema_defaults() -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Map::new();
        for question in QUESTIONS {
            let value = match question.kind {
                QuestionKind::Text { default } => serde_json::Value::from(default),
                QuestionKind::Confirm { default } => serde_json::Value::from(default),
                QuestionKind::Select { choices } => {
                    serde_json::Value::from(choices.first().map(|c| c.value).unwrap_or_default())
                }
            };
            values.insert(question.key.to_string(), value);
        }
        serde_json::from_value(serde_json::Value::Object(values))
    }

    pub fn language(&self) -> Language {
        if self.use_typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }

    /// Check the project name again before it reaches a subprocess
    pub fn validate(&self) -> Result<(), SetupError> {
        schema::validate_project_name(&self.project_name).map_err(SetupError::InvalidProjectName)
    }

    /// Names of the optional features this record turns on
    pub fn features(&self) -> Vec<&'static str> {
        let mut features = Vec::new();
        if self.use_typescript {
            features.push("TypeScript");
        }
        if self.use_eslint {
            features.push("ESLint");
        }
        if self.use_tailwind {
            features.push("Tailwind CSS");
        }
        if self.use_router {
            features.push("React Router");
        }
        if let Some(name) = self.state_management.display_name() {
            features.push(name);
        }
        if self.use_icons {
            features.push("Lucide Icons");
        }
        if self.use_axios {
            features.push("Axios");
        }
        features
    }
}
