//! Project layout anchored on the `main` root directory
//!
//! Config files live at `<root>/config/<name>`, where `<root>` is the nearest
//! ancestor directory literally named `main`.

use std::path::{Path, PathBuf};

use crate::constants::ProjectPath;
use crate::path::find_ancestor;
use crate::Result;

/// Resolved project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Detect the project root by walking upward from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if no ancestor of `start` is named `main`.
    pub fn detect(start: impl AsRef<Path>) -> Result<Self> {
        let root = find_ancestor(start, ProjectPath::MainRoot.as_str())?;
        Ok(Self { root })
    }

    /// Use `root` as the project root without searching.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `main` directory this layout is anchored on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the INI config files.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(ProjectPath::ConfigDir)
    }

    /// Full path of the config file called `config_name`.
    pub fn config_file(&self, config_name: &str) -> PathBuf {
        self.config_dir().join(config_name)
    }
}
