//! Widget entry points
//!
//! The Mendix widget host loads three JavaScript files per widget and calls
//! them through a fixed set of exported names:
//!
//! - `<Name>.jsx` exports the widget function `<Name>`
//! - `<Name>.editorPreview.jsx` exports `preview` and `getPreviewCss`
//! - `<Name>.editorConfig.js` exports `getProperties`, `getPreview` and
//!   `getCustomCaption`
//!
//! Each file is a thin adapter that forwards to the compiled modules.
//! Exported names are part of the host contract and must stay as they are.

use std::path::{Path, PathBuf};

use crate::core::manifest::WidgetConfig;
use crate::core::template::{render_checked, Replacements};
use crate::error::FilesystemError;
use crate::infra::filesystem;

const WIDGET_TEMPLATE: &str = r#"import { createElement } from "react";
import { mendix_widget_gleam } from "./{{WIDGET_MODULE}}";
import "./ui/{{WIDGET_NAME}}.css";

export function {{WIDGET_NAME}}(props) {
    return mendix_widget_gleam(props);
}
"#;

const EDITOR_PREVIEW_TEMPLATE: &str = r#"import { createElement } from "react";
import { editor_preview } from "./{{WIDGET_MODULE}}";

export function preview(props) {
    return editor_preview(props);
}

export function getPreviewCss() {
    return require("./ui/{{WIDGET_NAME}}.css");
}
"#;

const EDITOR_CONFIG_TEMPLATE: &str = r#"import {
    get_properties,
    check,
    get_preview,
    get_custom_caption
} from "./{{EDITOR_CONFIG_MODULE}}";

/**
 * @typedef Property
 * @type {object}
 * @property {string} key
 * @property {string} caption
 * @property {string} description
 * @property {string[]} objectHeaders
 * @property {ObjectProperties[]} objects
 * @property {Properties[]} properties
 */

/**
 * @typedef Problem
 * @type {object}
 * @property {string} property
 * @property {("error" | "warning" | "deprecation")} severity
 * @property {string} message
 * @property {string} studioMessage
 * @property {string} url
 * @property {string} studioUrl
 */

/**
 * @param {object} values
 * @param {object} defaultProperties
 * @param {("web"|"desktop")} target
 * @returns {object}
 */
export function getProperties(values, defaultProperties, target) {
    return get_properties(values, defaultProperties, target);
}

/**
 * @param {object} values
 * @param {boolean} isDarkMode
 * @param {number[]} version
 * @returns {object}
 */
export function getPreview(values, isDarkMode, version) {
    return get_preview(values, isDarkMode, version);
}

/**
 * @param {Object} values
 * @param {("web"|"desktop")} platform
 * @returns {string}
 */
export function getCustomCaption(values, platform) {
    return get_custom_caption(values, platform);
}
"#;

/// Kind of generated entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Runtime widget component
    Widget,
    /// Studio Pro design-mode preview
    EditorPreview,
    /// Studio Pro property panel configuration
    EditorConfig,
}

impl EntryPoint {
    /// All entry points, in generation order
    pub const ALL: [EntryPoint; 3] = [Self::Widget, Self::EditorPreview, Self::EditorConfig];

    /// File name for a widget called `name`
    pub fn file_name(self, name: &str) -> String {
        match self {
            Self::Widget => format!("{name}.jsx"),
            Self::EditorPreview => format!("{name}.editorPreview.jsx"),
            Self::EditorConfig => format!("{name}.editorConfig.js"),
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Widget => WIDGET_TEMPLATE,
            Self::EditorPreview => EDITOR_PREVIEW_TEMPLATE,
            Self::EditorConfig => EDITOR_CONFIG_TEMPLATE,
        }
    }
}

/// Import paths of the compiled modules, relative to the widget source dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePaths {
    /// Module exporting `mendix_widget_gleam` and `editor_preview`
    pub widget: String,
    /// Module exporting the editor config functions
    pub editor_config: String,
}

/// Render one entry point
pub fn render_entry(entry: EntryPoint, widget: &WidgetConfig, modules: &ModulePaths) -> String {
    let mut replacements: Replacements = widget.replacements();
    replacements.insert("WIDGET_MODULE".to_string(), modules.widget.clone());
    replacements.insert(
        "EDITOR_CONFIG_MODULE".to_string(),
        modules.editor_config.clone(),
    );
    render_checked(entry.template(), &replacements, &entry.file_name(&widget.name))
}

/// Write all entry points into `src_dir`, returning the written paths
pub fn generate_entry_points(
    src_dir: &Path,
    widget: &WidgetConfig,
    modules: &ModulePaths,
) -> Result<Vec<PathBuf>, FilesystemError> {
    EntryPoint::ALL
        .iter()
        .map(|&entry| {
            let path = src_dir.join(entry.file_name(&widget.name));
            filesystem::write_file(&path, &render_entry(entry, widget, modules))?;
            tracing::info!("Generated: {}", path.display());
            Ok(path)
        })
        .collect()
}
