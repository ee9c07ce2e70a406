//! [`ProjectFixture`] builder for cfgkit test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory containing a `main` project root with a `config`
/// directory, nested under `<tmp>/workspace/` so that the temp dir itself
/// is never mistaken for the root.
///
/// # Example
///
/// ```rust,no_run
/// use cfgkit_test_utils::project::ProjectFixture;
///
/// let project = ProjectFixture::new();
/// project.write_config("app.ini", "[db]\nhost = localhost\n");
/// project.assert_config_contains("app.ini", "host");
/// ```
pub struct ProjectFixture {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFixture {
    /// Create `<tmp>/workspace/main/config`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("workspace").join("main");
        fs::create_dir_all(root.join("config"))
            .unwrap_or_else(|e| panic!("ProjectFixture::new: failed to create config dir: {e}"));
        Self { temp_dir, root }
    }

    /// Path of the temporary directory holding the whole tree.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the `main` project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    pub fn config_path(&self, name: &str) -> PathBuf {
        self.config_dir().join(name)
    }

    /// Create (if needed) and return `<root>/<relative>`, for starting
    /// searches from deep inside the project.
    pub fn subdir(&self, relative: &str) -> PathBuf {
        let dir = self.root.join(relative);
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("ProjectFixture::subdir: failed to create {relative}: {e}"));
        dir
    }

    /// Write `content` to `<root>/config/<name>`.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_path(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ProjectFixture::write_config: failed to write {name}: {e}"));
        path
    }

    /// Copy a checked-in fixture file into `<root>/config/`.
    pub fn copy_config(&self, source: &Path) -> PathBuf {
        let name = source
            .file_name()
            .unwrap_or_else(|| panic!("ProjectFixture::copy_config: {} has no file name", source.display()));
        let target = self.config_dir().join(name);
        fs::copy(source, &target).unwrap_or_else(|e| {
            panic!(
                "ProjectFixture::copy_config: failed to copy {}: {e}",
                source.display()
            )
        });
        target
    }

    pub fn read_config(&self, name: &str) -> String {
        let path = self.config_path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that the config file `name` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_config_contains(&self, name: &str, content: &str) {
        let file_content = self.read_config(name);
        assert!(
            file_content.contains(content),
            "Config {} does not contain expected content.\nExpected: {}\nActual: {}",
            name,
            content,
            file_content
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}
