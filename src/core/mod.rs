//! Core build logic
//!
//! # Submodules
//!
//! - [`manifest`] - Widget manifest (package.json) parsing
//! - [`project_config`] - Optional mxwidget.toml settings
//! - [`layout`] - Resolved paths and settings for one build
//! - [`relocate`] - Moving compiled modules into the widget tree
//! - [`rewrite`] - Literal import path rewriting
//! - [`template`] - `{{KEY}}` template rendering and manifest templates
//! - [`entrypoints`] - React adapter entry points
//! - [`digest`] - Content digest of generated output
//! - [`builder`] - Build orchestration
//! - [`check`] - Project validation without building
//! - [`clean`] - Removing generated sources
//! - [`init`] - Writing default templates

pub mod builder;
pub mod check;
pub mod clean;
pub mod digest;
pub mod entrypoints;
pub mod init;
pub mod layout;
pub mod manifest;
pub mod project_config;
pub mod relocate;
pub mod rewrite;
pub mod template;
