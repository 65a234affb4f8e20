//! `.eslintrc.json` builder

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

const FAST_REFRESH_RULE: &str = "react-refresh/only-export-components";
const TS_PARSER: &str = "@typescript-eslint/parser";
const TS_PLUGIN: &str = "@typescript-eslint";
const TS_RECOMMENDED: &str = "plugin:@typescript-eslint/recommended";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EslintEnv {
    pub browser: bool,
    pub es2020: bool,
}

/// Legacy (eslintrc) ESLint configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintConfig {
    pub root: bool,
    pub env: EslintEnv,
    pub extends: Vec<&'static str>,
    pub ignore_patterns: Vec<&'static str>,
    /// Omitted entirely for JavaScript projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<&'static str>,
    pub plugins: Vec<&'static str>,
    pub rules: BTreeMap<&'static str, Value>,
}

impl EslintConfig {
    pub fn new(typescript: bool) -> Self {
        let mut extends = vec!["eslint:recommended"];
        if typescript {
            extends.push(TS_RECOMMENDED);
        }
        // prettier must stay last
        extends.push("prettier");

        let mut plugins = vec!["react-refresh"];
        if typescript {
            plugins.push(TS_PLUGIN);
        }

        let mut rules = BTreeMap::new();
        rules.insert(
            FAST_REFRESH_RULE,
            json!(["warn", { "allowConstantExport": true }]),
        );

        Self {
            root: true,
            env: EslintEnv {
                browser: true,
                es2020: true,
            },
            extends,
            ignore_patterns: vec!["dist", ".eslintrc.cjs"],
            parser: typescript.then_some(TS_PARSER),
            plugins,
            rules,
        }
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
