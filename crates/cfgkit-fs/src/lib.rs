//! Configuration file helpers for cfgkit
//!
//! Provides a self-repairing INI config store anchored on the project's
//! `main` directory, plus no-overwrite JSON document persistence.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod layout;
pub mod path;

pub use config::{ConfigStore, SectionMap};
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use json::{JsonMap, SaveOutcome};
pub use layout::ProjectLayout;
pub use path::find_ancestor;
