//! Styling templates: index.css, Tailwind config, Vite config

pub const TAILWIND_CSS: &str = "@import \"tailwindcss\";\n";

pub const RESET_CSS: &str = r#"body {
  margin: 0;
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
}
"#;

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

/// Vite config registering the Tailwind plugin next to the React plugin.
/// Identical for both language variants; only the file extension differs.
pub const VITE_CONFIG_WITH_TAILWIND: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import tailwindcss from '@tailwindcss/vite'

// https://vite.dev/config/
export default defineConfig({
  plugins: [react(), tailwindcss()],
})
"#;

/// Base stylesheet: a single import directive with Tailwind, a minimal reset otherwise
pub fn index_css(tailwind: bool) -> &'static str {
    if tailwind {
        TAILWIND_CSS
    } else {
        RESET_CSS
    }
}

pub fn tailwind_config() -> &'static str {
    TAILWIND_CONFIG
}

pub fn vite_config() -> &'static str {
    VITE_CONFIG_WITH_TAILWIND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_stylesheet_is_single_import() {
        let css = index_css(true);
        assert_eq!(css.trim().lines().count(), 1);
        assert!(css.starts_with("@import"));
    }

    #[test]
    fn test_reset_stylesheet() {
        let css = index_css(false);
        assert_eq!(css, RESET_CSS);
        assert!(css.contains("margin: 0"));
        assert!(css.contains("system-ui"));
        assert!(!css.contains("tailwind"));
    }

    #[test]
    fn test_vite_config_keeps_react_plugin() {
        let config = vite_config();
        assert!(config.contains("plugins: [react(), tailwindcss()]"));
        assert!(config.contains("from '@tailwindcss/vite'"));
    }
}
