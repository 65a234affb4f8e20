//! Prompt schema: the fixed, ordered list of setup questions
//!
//! Every question is asked unconditionally. Branching on the answers happens
//! later, when the install plan is derived.

/// Validator mapping a candidate answer to acceptance or a rejection reason
pub type Validator = fn(&str) -> Result<(), String>;

pub const PROJECT_NAME: &str = "project_name";
pub const USE_TYPESCRIPT: &str = "use_typescript";
pub const USE_ESLINT: &str = "use_eslint";
pub const USE_TAILWIND: &str = "use_tailwind";
pub const USE_ROUTER: &str = "use_router";
pub const STATE_MANAGEMENT: &str = "state_management";
pub const USE_ICONS: &str = "use_icons";
pub const USE_AXIOS: &str = "use_axios";

pub const DEFAULT_PROJECT_NAME: &str = "my-react-app";

/// One option of a single-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Serialized value, as it appears in an answers file
    pub value: &'static str,
    pub label: &'static str,
}

/// Input kind of a question, with its default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Text { default: &'static str },
    Confirm { default: bool },
    /// The first choice is the initial selection
    Select { choices: &'static [Choice] },
}

/// A single question definition
#[derive(Clone, Copy)]
pub struct Question {
    /// Answer record field this question fills
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub validator: Option<Validator>,
}

impl Question {
    /// Run the validator, if any, against a candidate answer
    pub fn validate(&self, input: &str) -> Result<(), String> {
        match self.validator {
            Some(validator) => validator(input),
            None => Ok(()),
        }
    }
}

pub const STATE_MANAGEMENT_CHOICES: &[Choice] = &[
    Choice {
        value: "none",
        label: "None",
    },
    Choice {
        value: "zustand",
        label: "Zustand",
    },
    Choice {
        value: "redux-toolkit",
        label: "Redux Toolkit",
    },
];

/// All questions, in the order they are asked
pub const QUESTIONS: &[Question] = &[
    Question {
        key: PROJECT_NAME,
        message: "Project name",
        kind: QuestionKind::Text {
            default: DEFAULT_PROJECT_NAME,
        },
        validator: Some(validate_project_name as Validator),
    },
    Question {
        key: USE_TYPESCRIPT,
        message: "Use TypeScript?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
    Question {
        key: USE_ESLINT,
        message: "Include ESLint?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
    Question {
        key: USE_TAILWIND,
        message: "Include Tailwind CSS?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
    Question {
        key: USE_ROUTER,
        message: "Add React Router?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
    Question {
        key: STATE_MANAGEMENT,
        message: "Choose a state management library",
        kind: QuestionKind::Select {
            choices: STATE_MANAGEMENT_CHOICES,
        },
        validator: None,
    },
    Question {
        key: USE_ICONS,
        message: "Include Lucide Icons?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
    Question {
        key: USE_AXIOS,
        message: "Include axios?",
        kind: QuestionKind::Confirm { default: true },
        validator: None,
    },
];

/// Accept only non-empty names made of letters, digits, `-` and `_`
///
/// The name becomes a directory and a subprocess argument, so this is also
/// the sanitization check for non-interactive input.
pub fn validate_project_name(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Project name cannot be empty".to_string());
    }

    if let Some(bad) = input
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!(
            "Project name can only contain letters, numbers, hyphens and underscores (found {:?})",
            bad
        ));
    }

    Ok(())
}
