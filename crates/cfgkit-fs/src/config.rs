//! INI configuration store with self-repair
//!
//! A [`ConfigStore`] is either [`ConfigStore::Unbound`] or bound to one INI
//! file on disk. Every accessor matches on the variant and fails with
//! [`Error::Uninitialized`] when nothing is bound.
//!
//! [`ConfigStore::ensure_section`] adds missing sections and keys with
//! caller-supplied defaults. Each individual change is flushed to disk
//! immediately, so a repair that adds one section and two keys writes the
//! file three times.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ini::{EscapePolicy, Ini, ParseOption, Properties, WriteOption};

use crate::layout::ProjectLayout;
use crate::{Error, Result, io};

/// Snapshot of one section's key/value pairs.
///
/// Detached from the document: later repairs are not reflected in it.
pub type SectionMap = BTreeMap<String, String>;

const INI_FORMAT: &str = "INI";

/// Accessor for a single INI configuration file.
#[derive(Default)]
pub enum ConfigStore {
    /// No file bound yet. Every accessor fails with [`Error::Uninitialized`].
    #[default]
    Unbound,
    /// Parsed document together with the file it was read from.
    Bound { document: Ini, path: PathBuf },
}

impl ConfigStore {
    /// Bind to `<project_root>/config/<config_name>`, searching for the
    /// project root upward from the current working directory.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no `main` ancestor or the file is missing
    /// - [`Error::MalformedData`] if the file is not valid INI
    pub fn bind(config_name: &str) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Self::bind_from(&cwd, config_name)
    }

    /// Like [`ConfigStore::bind`], but searches upward from `start`.
    pub fn bind_from(start: impl AsRef<Path>, config_name: &str) -> Result<Self> {
        let layout = ProjectLayout::detect(start)?;
        Self::bind_in(&layout, config_name)
    }

    /// Bind to `config_name` inside an already resolved layout.
    pub fn bind_in(layout: &ProjectLayout, config_name: &str) -> Result<Self> {
        Self::open(layout.config_file(config_name))
    }

    /// Bind directly to an INI file path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::not_found(path));
        }

        let content = io::read_text(&path)?;
        let document = Ini::load_from_str_opt(&content, parse_options())
            .map_err(|e| Error::malformed(&path, INI_FORMAT, e))?;

        tracing::debug!(path = %path.display(), "Bound config file");
        Ok(Self::Bound { document, path })
    }

    /// Whether a config file is bound.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }

    /// Path of the bound config file.
    pub fn path(&self) -> Result<&Path> {
        self.bound().map(|(_, path)| path)
    }

    /// Snapshot of the key/value pairs in `section`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if the section does not exist.
    pub fn get_section(&self, section: &str) -> Result<SectionMap> {
        let (document, path) = self.bound()?;
        document
            .section(Some(section))
            .map(snapshot)
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
                path: path.to_path_buf(),
            })
    }

    /// Every section with its pairs, in document order.
    ///
    /// Keys written before the first section header are not reported.
    pub fn get_all(&self) -> Result<Vec<(String, SectionMap)>> {
        let (document, _) = self.bound()?;
        Ok(section_names(document)
            .into_iter()
            .filter_map(|name| {
                let pairs = document.section(Some(name.as_str())).map(snapshot)?;
                Some((name, pairs))
            })
            .collect())
    }

    /// Section names in document order.
    pub fn list_sections(&self) -> Result<Vec<String>> {
        let (document, _) = self.bound()?;
        Ok(section_names(document))
    }

    /// Whether `section` exists in the document.
    pub fn has_section(&self, section: &str) -> Result<bool> {
        let (document, _) = self.bound()?;
        Ok(document.section(Some(section)).is_some())
    }

    /// Make sure `section` exists and holds every key in `defaults`.
    ///
    /// Missing keys are set to their default, in the order `defaults`
    /// yields them, and the file is rewritten after each one. Keys already
    /// present keep their value. The returned map holds exactly the keys of
    /// `defaults` with their effective values.
    ///
    /// Calling this twice with the same arguments returns the same map and
    /// does not write on the second call.
    pub fn ensure_section<I, K, V>(&mut self, section: &str, defaults: I) -> Result<SectionMap>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (document, path) = self.bound_mut()?;

        if document.section(Some(section)).is_none() {
            document
                .entry(Some(section.to_string()))
                .or_insert_with(Properties::new);
            tracing::info!(section, path = %path.display(), "Added missing config section");
            flush(document, path)?;
        }

        let mut merged = SectionMap::new();
        for (key, default) in defaults {
            let key = key.into();
            let existing = document
                .section(Some(section))
                .and_then(|pairs| pairs.get(&key))
                .map(str::to_string);

            let value = match existing {
                Some(value) => value,
                None => {
                    let default = default.into();
                    document
                        .entry(Some(section.to_string()))
                        .or_insert_with(Properties::new)
                        .insert(key.clone(), default.clone());
                    tracing::debug!(section, key = %key, "Applied default for missing key");
                    flush(document, path)?;
                    default
                }
            };
            merged.insert(key, value);
        }

        Ok(merged)
    }

    fn bound(&self) -> Result<(&Ini, &Path)> {
        match self {
            Self::Bound { document, path } => Ok((document, path.as_path())),
            Self::Unbound => Err(Error::Uninitialized),
        }
    }

    fn bound_mut(&mut self) -> Result<(&mut Ini, &Path)> {
        match self {
            Self::Bound { document, path } => Ok((document, path.as_path())),
            Self::Unbound => Err(Error::Uninitialized),
        }
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbound => f.write_str("Unbound"),
            Self::Bound { document, path } => f
                .debug_struct("Bound")
                .field("path", path)
                .field("sections", &section_names(document))
                .finish(),
        }
    }
}

/// Values are plain strings: quotes and backslashes are kept as written.
fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

fn write_options() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        ..Default::default()
    }
}

fn snapshot(pairs: &Properties) -> SectionMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Named sections, first occurrence wins.
fn section_names(document: &Ini) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in document.sections().flatten() {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Serialize the whole document and overwrite `path` with it.
fn flush(document: &Ini, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    document
        .write_to_opt(&mut buffer, write_options())
        .map_err(|e| Error::io(path, e))?;
    io::write_bytes(path, &buffer)?;
    tracing::debug!(path = %path.display(), bytes = buffer.len(), "Flushed config file");
    Ok(())
}
