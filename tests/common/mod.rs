//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a widget project with a manifest, staged compiler output and
    /// all three manifest templates
    pub fn widget(name: &str) -> Self {
        let project = Self::new();
        project.create_file("package.json", &sample_manifest(name));
        project.stage_compiler_output();
        project.create_file("src-gleam/templates/widget.xml", SAMPLE_WIDGET_XML);
        project.create_file("src-gleam/templates/package.xml", SAMPLE_PACKAGE_XML);
        project.create_file("src-gleam/templates/widget.css", SAMPLE_WIDGET_CSS);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Remove a file from the test project
    pub fn remove_file(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("Failed to remove file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Read a file as raw bytes
    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Stage JavaScript output the way `gleam build` writes it
    pub fn stage_compiler_output(&self) {
        let out = "src-gleam/build/dev/javascript";
        self.create_file(&format!("{out}/prelude.mjs"), "export class CustomType {}\n");
        self.create_file(
            &format!("{out}/gleam_stdlib/gleam.mjs"),
            "export * from \"../prelude.mjs\";\n",
        );
        self.create_file(
            &format!("{out}/gleam_stdlib/gleam/list.mjs"),
            "import { toList } from \"../gleam.mjs\";\n",
        );
        self.create_file(
            &format!("{out}/components/gleam.mjs"),
            "export * from \"../prelude.mjs\";\n",
        );
        self.create_file(
            &format!("{out}/components/mendix/widget.mjs"),
            concat!(
                "import * as $list from \"../../gleam_stdlib/gleam/list.mjs\";\n",
                "import { toList } from \"../gleam.mjs\";\n",
                "export function mendix_widget_gleam(props) {}\n",
                "export function editor_preview(props) {}\n",
            ),
        );
        self.create_file(
            &format!("{out}/components/mendix/editor_config.mjs"),
            "export function get_properties(values, defaults, target) { return defaults; }\n",
        );
        self.create_file(
            &format!("{out}/components/utils/react_helpers.mjs"),
            "import { createPropsObject } from \"../js_ffi/react_helpers_ffi.js\";\n",
        );
        self.create_file(
            "src-gleam/js_ffi/react_helpers_ffi.js",
            "export function createPropsObject(pairs) { return {}; }\n",
        );
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the mxwidget binary in the project directory
#[allow(dead_code)]
pub fn run_mxwidget(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mxwidget"));
    cmd.current_dir(project.path());
    cmd.env_remove("MXWIDGET_PROJECT_DIR");
    cmd.env_remove("MXWIDGET_COMPILER");
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute mxwidget")
}

/// Sample package.json for a widget
#[allow(dead_code)]
pub fn sample_manifest(name: &str) -> String {
    format!(
        r#"{{
  "name": "mendix-widget-gleam",
  "widgetName": "{name}",
  "version": "1.0.0",
  "packagePath": "sbtglobal",
  "scripts": {{ "build": "mxwidget build" }}
}}
"#
    )
}

/// Sample widget.xml template
#[allow(dead_code)]
pub const SAMPLE_WIDGET_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<widget id="{{PACKAGE_PATH}}.{{WIDGET_NAME_LOWER}}.{{WIDGET_NAME}}" pluginWidget="true">
    <name>{{WIDGET_NAME}}</name>
</widget>
"#;

/// Sample package.xml template
#[allow(dead_code)]
pub const SAMPLE_PACKAGE_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<package xmlns="http://www.mendix.com/package/1.0/">
    <clientModule name="{{WIDGET_NAME}}" version="{{VERSION}}">
        <files>
            <file path="{{PACKAGE_PATH}}/{{WIDGET_NAME_LOWER}}"/>
        </files>
    </clientModule>
</package>
"#;

/// Sample widget.css template
#[allow(dead_code)]
pub const SAMPLE_WIDGET_CSS: &str = ".widget-{{WIDGET_NAME_LOWER}} {\n    display: block;\n}\n";
