//! File writer used to materialize generated files

use crate::error::SetupError;
use async_trait::async_trait;
use colored::Colorize;
use std::path::Path;
use tokio::fs;

/// Writes a literal string to a path, creating or overwriting the file
#[async_trait]
pub trait FileWriter: Send + Sync {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SetupError>;
}

/// Writes to the real file system, creating parent directories as needed
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

#[async_trait]
impl FileWriter for FsWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SetupError> {
        let to_error = |source| SetupError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(to_error)?;
            }
        }

        fs::write(path, content).await.map_err(to_error)
    }
}

/// Prints file writes instead of performing them (`--dry-run`)
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunWriter;

#[async_trait]
impl FileWriter for DryRunWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), SetupError> {
        println!(
            "  {} {} {}",
            "Would write:".dimmed(),
            path.display().to_string().cyan(),
            format!("({} bytes)", content.len()).dimmed()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("App.tsx");

        FsWriter.write(&path, "export default App\n").await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "export default App\n"
        );
    }

    #[tokio::test]
    async fn test_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.css");
        std::fs::write(&path, "a much longer original stylesheet body").unwrap();

        FsWriter.write(&path, "short").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[tokio::test]
    async fn test_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected
        let blocker = dir.path().join("src");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("App.tsx");

        let err = FsWriter.write(&path, "x").await.unwrap_err();
        match err {
            SetupError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.js");

        DryRunWriter.write(&path, "x").await.unwrap();

        assert!(!path.exists());
    }
}
