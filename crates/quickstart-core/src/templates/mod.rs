//! Static file templates written into the generated project
//!
//! This module provides:
//! - Stylesheet, Tailwind and Vite config templates
//! - The ESLint config builder
//! - The `App` entry component (with or without routing)

pub mod app;
pub mod eslint;
pub mod styles;

pub use app::app_component;
pub use eslint::EslintConfig;
pub use styles::{index_css, tailwind_config, vite_config};
