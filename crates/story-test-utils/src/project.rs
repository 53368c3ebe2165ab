//! [`TestProject`] builder for preset configuration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root plus a separate temporary global config
/// directory, with helpers for writing each `presets.toml` layer.
///
/// # Example
///
/// ```rust,no_run
/// use story_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_global_config("[append]\naddons = [\"a\"]\n");
/// project.write_project_config("[append]\naddons = [\"b\"]\n");
/// project.assert_file_exists(".story/presets.toml");
/// ```
pub struct TestProject {
    root: TempDir,
    global: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create empty project and global config directories.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            global: TempDir::new().unwrap(),
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory standing in for the user's global config directory.
    pub fn global_dir(&self) -> &Path {
        self.global.path()
    }

    /// Write `<global>/presets.toml`.
    pub fn write_global_config(&self, content: &str) -> PathBuf {
        let path = self.global_dir().join("presets.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `<root>/.story/presets.toml`.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write_file(".story/presets.toml", content)
    }

    /// Write `<root>/.story/presets.local.toml`.
    pub fn write_local_config(&self, content: &str) -> PathBuf {
        self.write_file(".story/presets.local.toml", content)
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert a file exists relative to the project root.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.root().join(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }
}
