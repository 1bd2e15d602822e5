//! Widget manifest (package.json) parsing
//!
//! The manifest is the npm package file of the widget project. Only the
//! `widgetName`, `packagePath` and `version` keys are read; everything else
//! belongs to the JavaScript tooling and is ignored.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::ManifestError;

/// Raw manifest fields as they appear in package.json
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetManifest {
    /// Widget name, used for file names and the exported widget function
    #[serde(default)]
    pub widget_name: Option<serde_json::Value>,

    /// Mendix package path (e.g. `com.company`)
    #[serde(default)]
    pub package_path: Option<String>,

    /// Widget version
    #[serde(default)]
    pub version: Option<String>,
}

/// Flat widget configuration derived from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetConfig {
    /// Widget name as written in the manifest
    pub name: String,
    /// Lowercase widget name
    pub name_lower: String,
    /// Mendix package path
    pub package_path: String,
    /// Widget version
    pub version: String,
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"))
}

/// Whether `name` can be used as a JavaScript function name
pub fn is_valid_widget_name(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Empty strings count as absent, so they fall back to the default
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl WidgetConfig {
    /// Build a config from already-parsed manifest fields
    ///
    /// `path` is only used in error messages.
    pub fn from_manifest(
        manifest: WidgetManifest,
        path: &Path,
        default_package_path: &str,
    ) -> Result<Self, ManifestError> {
        let name = match manifest.widget_name {
            Some(serde_json::Value::String(name)) if !name.is_empty() => name,
            _ => {
                return Err(ManifestError::MissingField {
                    path: path.to_path_buf(),
                    field: "widgetName".to_string(),
                })
            }
        };

        if !is_valid_widget_name(&name) {
            return Err(ManifestError::InvalidWidgetName { name });
        }

        let version = non_empty(manifest.version)
            .unwrap_or_else(|| defaults::DEFAULT_VERSION.to_string());
        if semver::Version::parse(&version).is_err() {
            tracing::warn!("Widget version '{version}' is not a valid semver version");
        }

        Ok(Self {
            name_lower: name.to_lowercase(),
            name,
            package_path: non_empty(manifest.package_path)
                .unwrap_or_else(|| default_package_path.to_string()),
            version,
        })
    }

    /// Parse manifest JSON text
    pub fn from_json(
        content: &str,
        path: &Path,
        default_package_path: &str,
    ) -> Result<Self, ManifestError> {
        let parse_error = |error: String| ManifestError::Parse {
            path: path.to_path_buf(),
            error,
        };
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        // serde would also accept a positional array for the struct
        if !value.is_object() {
            return Err(parse_error("expected a JSON object".to_string()));
        }
        let manifest: WidgetManifest =
            serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?;
        Self::from_manifest(manifest, path, default_package_path)
    }

    /// Read and parse the manifest file at `path`
    pub fn load(path: &Path, default_package_path: &str) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_json(&content, path, default_package_path)
    }

    /// Placeholder values for template rendering
    pub fn replacements(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("WIDGET_NAME".to_string(), self.name.clone()),
            ("WIDGET_NAME_LOWER".to_string(), self.name_lower.clone()),
            ("PACKAGE_PATH".to_string(), self.package_path.clone()),
            ("VERSION".to_string(), self.version.clone()),
        ])
    }
}
