//! Project configuration (mxwidget.toml)
//!
//! Optional per-project overrides for directory locations, the compiler
//! command and the output layout. Every key is optional; a missing file
//! means built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::ConfigError;

/// Contents of mxwidget.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Directory locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Compiler command
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Output layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Widget metadata defaults
    #[serde(default)]
    pub widget: WidgetDefaults,
}

/// Directory locations, relative to the project root
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Widget manifest (package.json)
    pub manifest: Option<String>,
    /// Directory the compiler runs in
    pub compiler_project: Option<String>,
    /// Widget source directory receiving the generated files
    pub widget_src: Option<String>,
    /// Manifest templates
    pub templates: Option<String>,
    /// Hand-written FFI helpers
    pub ffi: Option<String>,
    /// Compiler JavaScript output
    pub compiler_output: Option<String>,
}

/// Compiler command
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompilerConfig {
    /// Program name or path
    pub command: Option<String>,
    /// Arguments
    pub args: Option<Vec<String>>,
}

/// Output layout settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// `nested` or `flat`
    pub mode: Option<String>,
    /// Compiled project directory inside the compiler output
    pub package_dir: Option<String>,
    /// Widget module, relative to the relocated module tree
    pub widget_module: Option<String>,
    /// Editor config module, relative to the relocated module tree
    pub editor_config_module: Option<String>,
    /// FFI helper placements for the nested layout
    pub ffi: Option<Vec<FfiPlacement>>,
}

/// An FFI helper and the module directory it is copied into
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FfiPlacement {
    /// File name inside the FFI directory
    pub file: String,
    /// Module directory (relative to the module tree) that imports it
    pub module_dir: String,
}

/// Widget metadata defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WidgetDefaults {
    /// Package path used when the manifest has none
    pub default_package_path: Option<String>,
}

impl ProjectConfig {
    /// Parse TOML text; `path` is only used in error messages
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load mxwidget.toml from `project_dir`, or defaults if absent
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(defaults::PROJECT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", defaults::PROJECT_CONFIG_FILE);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded project config from {}", path.display());
        Self::from_toml(&content, &path)
    }
}
