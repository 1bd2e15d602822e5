//! mxwidget - Mendix pluggable widget builder
//!
//! This library turns the JavaScript output of a Gleam project into the
//! source tree of a Mendix Studio Pro pluggable widget: compiled modules
//! relocated under `src/gleam`, React entry points for the widget, its
//! editor preview and editor config, and XML/CSS manifests rendered from
//! templates.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build logic: manifest, layout, relocation, templates
//! - [`infra`] - Infrastructure layer (filesystem, compiler process)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
