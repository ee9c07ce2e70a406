//! Shared test utilities for the cfgkit workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`]: [`project::ProjectFixture`], a builder for a temporary project tree

pub mod project;
