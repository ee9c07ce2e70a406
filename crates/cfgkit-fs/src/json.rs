//! JSON document load/save helpers
//!
//! Saving never overwrites: if the target file already exists the call
//! succeeds and leaves it untouched. Callers that want to replace a document
//! must delete the old file first.

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::constants::ProjectPath;
use crate::{Error, Result, io};

/// Top-level JSON object.
pub type JsonMap = Map<String, Value>;

const JSON_FORMAT: &str = "JSON";

/// What [`save`] did with the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file did not exist and now holds the document.
    Created(PathBuf),
    /// The file already existed and was left as it was.
    Skipped(PathBuf),
}

impl SaveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Skipped(path) => path,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Load a JSON object from `path`.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` does not exist
/// - [`Error::MalformedData`] if the content is not JSON or not an object
pub fn load(path: impl AsRef<Path>) -> Result<JsonMap> {
    let path = path.as_ref();
    match load_as::<Value>(path)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::malformed(
            path,
            JSON_FORMAT,
            format!("expected an object at top level, found {}", kind(&other)),
        )),
    }
}

/// Load and deserialize a JSON document from `path`.
pub fn load_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }

    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::malformed(path, JSON_FORMAT, e))
}

/// Write `data` to `<dir>/<name>.json` unless that file already exists.
///
/// The file is created empty first and then written.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `dir` is not an existing directory
/// or `data` is not a JSON object.
pub fn save(data: &Value, dir: impl AsRef<Path>, name: &str) -> Result<SaveOutcome> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::InvalidArgument {
            message: format!("target directory {} does not exist", dir.display()),
        });
    }
    if !data.is_object() {
        return Err(Error::InvalidArgument {
            message: format!("expected a JSON object, got {}", kind(data)),
        });
    }

    let target = dir.join(format!("{name}.{}", ProjectPath::JsonExtension));

    // Never clobber an existing document.
    if !io::create_new(&target)? {
        tracing::warn!(path = %target.display(), "JSON file already exists, not overwriting");
        return Ok(SaveOutcome::Skipped(target));
    }
    tracing::info!(path = %target.display(), "Created JSON file");

    let content = serde_json::to_string(data).map_err(|e| Error::malformed(&target, JSON_FORMAT, e))?;
    io::write_text(&target, &content)?;
    Ok(SaveOutcome::Created(target))
}

/// Serialize `data` and [`save`] it.
///
/// `data` must serialize to a JSON object (a struct or map).
pub fn save_as<T: Serialize>(data: &T, dir: impl AsRef<Path>, name: &str) -> Result<SaveOutcome> {
    let value = serde_json::to_value(data).map_err(|e| Error::InvalidArgument {
        message: format!("value cannot be represented as JSON: {e}"),
    })?;
    save(&value, dir, name)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
