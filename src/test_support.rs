use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Owned line sequence from string literals.
pub(crate) fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

/// A temporary project directory holding templates, targets and a manifest.
pub(crate) struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` lines (newline-terminated) to a project-relative path.
    pub(crate) fn write(&self, rel: &str, content: &[&str]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut text = content.join("\n");
        if !content.is_empty() {
            text.push('\n');
        }
        std::fs::write(&path, text).unwrap();
        path
    }

    /// Read a project-relative file as lines.
    pub(crate) fn read(&self, rel: &str) -> Vec<String> {
        let text = std::fs::read_to_string(self.dir.path().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", rel, e));
        text.lines().map(String::from).collect()
    }

    pub(crate) fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// Write `areasync.yaml` and return its path.
    pub(crate) fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join(crate::config::DEFAULT_CONFIG_FILE);
        std::fs::write(&path, yaml).unwrap();
        path
    }
}
