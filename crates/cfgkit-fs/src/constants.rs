//! Well-known path components of a cfgkit project.

use std::path::Path;

/// Standard project filesystem markers and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `main` directory (project root marker)
    MainRoot,
    /// The `config` directory holding INI files, directly under the root
    ConfigDir,
    /// Extension appended to JSON document names
    JsonExtension,
}

impl ProjectPath {
    /// Get the string representation of the path component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainRoot => "main",
            Self::ConfigDir => "config",
            Self::JsonExtension => "json",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
