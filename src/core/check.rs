//! Check command logic
//!
//! Validates the manifest, project config, templates and compiler without
//! building, and reports what a build would do.

use std::path::PathBuf;

use crate::core::layout::BuildLayout;
use crate::core::manifest::WidgetConfig;
use crate::core::template;

/// Result of the check operation
#[derive(Debug, Default)]
pub struct CheckResult {
    /// Parsed widget config, if the manifest is valid
    pub widget: Option<WidgetConfig>,
    /// Manifest error message, if invalid
    pub manifest_error: Option<String>,
    /// Resolved compiler path, if found on PATH
    pub compiler_path: Option<PathBuf>,
    /// Whether compiler output from a previous compile exists
    pub compiler_output_present: bool,
    /// Manifest templates found in the templates directory
    pub templates_present: Vec<String>,
    /// Manifest templates missing (their artifacts would be skipped)
    pub templates_missing: Vec<String>,
    /// Warnings encountered during check
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// Whether a build could start (the manifest is valid)
    pub fn is_valid(&self) -> bool {
        self.widget.is_some()
    }
}

/// Perform check operation on a resolved layout
pub fn check(layout: &BuildLayout) -> CheckResult {
    let mut result = CheckResult::default();

    match WidgetConfig::load(&layout.manifest_path, &layout.default_package_path) {
        Ok(widget) => result.widget = Some(widget),
        Err(e) => result.manifest_error = Some(e.to_string()),
    }

    result.compiler_path = layout.compiler.locate(&layout.compiler_project_dir).ok();

    if !layout.compiler_project_dir.is_dir() {
        result.warnings.push(format!(
            "Compiler project directory {} does not exist",
            layout.compiler_project_dir.display()
        ));
    }

    result.compiler_output_present = layout.package_dir().is_dir();

    for (name, _) in template::DEFAULT_TEMPLATES {
        if layout.templates_dir.join(name).is_file() {
            result.templates_present.push((*name).to_string());
        } else {
            result.templates_missing.push((*name).to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::Overrides;
    use crate::core::project_config::ProjectConfig;
    use tempfile::TempDir;

    fn layout(root: &std::path::Path, compiler: &str) -> BuildLayout {
        BuildLayout::resolve(
            root,
            &ProjectConfig::default(),
            &Overrides {
                layout: None,
                compiler: Some(compiler.to_string()),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_check_empty_project() {
        let dir = TempDir::new().unwrap();
        let result = check(&layout(dir.path(), "mxwidget-missing-compiler-xyz"));

        assert!(!result.is_valid());
        assert!(result.manifest_error.is_some());
        assert!(result.compiler_path.is_none());
        assert!(!result.compiler_output_present);
        assert_eq!(result.templates_missing.len(), 3);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_check_valid_project() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::write(root.join("package.json"), r#"{ "widgetName": "Foo" }"#).unwrap();
        std::fs::create_dir_all(root.join("src-gleam/templates")).unwrap();
        std::fs::create_dir_all(root.join("src-gleam/build/dev/javascript/components")).unwrap();
        std::fs::write(root.join("src-gleam/templates/widget.xml"), "").unwrap();

        let result = check(&layout(root, "mxwidget-missing-compiler-xyz"));

        assert!(result.is_valid());
        assert_eq!(result.widget.as_ref().unwrap().name, "Foo");
        assert!(result.compiler_output_present);
        assert_eq!(result.templates_present, vec!["widget.xml"]);
        assert_eq!(result.templates_missing, vec!["package.xml", "widget.css"]);
    }
}
