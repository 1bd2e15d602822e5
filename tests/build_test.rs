//! Integration tests for `mxwidget build`
//!
//! - Entry points follow the widget name from the manifest
//! - Repeated builds produce byte-identical output
//! - A missing template skips only its own artifact
//! - Compiler and manifest failures exit with code 1

mod common;

use common::{run_mxwidget, TestProject};

fn assert_success(output: &std::process::Output) {
    assert!(
        output.status.success(),
        "mxwidget failed:\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_build_generates_widget_entry_for_name() {
    let project = TestProject::widget("Foo");

    let output = run_mxwidget(&project, &["build", "--no-compile"]);
    assert_success(&output);

    let entry = project.read_file("src/Foo.jsx");
    assert!(entry.contains("import \"./ui/Foo.css\";"), "{entry}");
    assert!(entry.contains("export function Foo(props) {"), "{entry}");
    assert!(entry.contains("from \"./gleam/mendix/widget.mjs\";"), "{entry}");
}

#[test]
fn test_build_generates_host_contract_entry_points() {
    let project = TestProject::widget("Foo");

    assert_success(&run_mxwidget(&project, &["build", "--no-compile"]));

    let preview = project.read_file("src/Foo.editorPreview.jsx");
    assert!(preview.contains("export function preview(props)"));
    assert!(preview.contains("export function getPreviewCss()"));

    let config = project.read_file("src/Foo.editorConfig.js");
    assert!(config.contains("export function getProperties("));
    assert!(config.contains("export function getPreview("));
    assert!(config.contains("export function getCustomCaption("));
    assert!(config.contains("from \"./gleam/mendix/editor_config.mjs\";"));
}

#[test]
fn test_build_renders_manifests() {
    let project = TestProject::widget("Foo");

    assert_success(&run_mxwidget(&project, &["build", "--no-compile"]));

    let widget_xml = project.read_file("src/Foo.xml");
    assert!(widget_xml.contains(r#"id="sbtglobal.foo.Foo""#));
    assert!(widget_xml.contains("<name>Foo</name>"));
    let package_xml = project.read_file("src/package.xml");
    assert!(package_xml.contains(r#"<clientModule name="Foo" version="1.0.0">"#));
    assert!(package_xml.contains(r#"<file path="sbtglobal/foo"/>"#));
    assert_eq!(
        project.read_file("src/ui/Foo.css"),
        ".widget-foo {\n    display: block;\n}\n"
    );
}

#[test]
fn test_build_relocates_and_rewrites_modules() {
    let project = TestProject::widget("Foo");

    assert_success(&run_mxwidget(&project, &["build", "--no-compile"]));

    let widget = project.read_file("src/gleam/mendix/widget.mjs");
    assert!(widget.contains("from \"../gleam_stdlib/gleam/list.mjs\";"));
    assert_eq!(
        project.read_file("src/gleam/gleam.mjs"),
        "export * from \"./prelude.mjs\";\n"
    );
    assert_eq!(
        project.read_file("src/gleam/gleam_stdlib/gleam.mjs"),
        "export * from \"../prelude.mjs\";\n"
    );
    assert!(project
        .read_file("src/gleam/utils/react_helpers.mjs")
        .contains("from \"./react_helpers_ffi.js\";"));
    assert!(project.file_exists("src/gleam/utils/react_helpers_ffi.js"));
    assert!(project.file_exists("src/gleam/prelude.mjs"));
}

#[test]
fn test_build_twice_is_byte_identical() {
    let project = TestProject::widget("Foo");
    let files = [
        "src/Foo.jsx",
        "src/Foo.editorPreview.jsx",
        "src/Foo.editorConfig.js",
        "src/Foo.xml",
        "src/package.xml",
        "src/ui/Foo.css",
        "src/gleam/mendix/widget.mjs",
        "src/gleam/gleam.mjs",
        "src/gleam/utils/react_helpers.mjs",
    ];

    let first = run_mxwidget(&project, &["--json", "build", "--no-compile"]);
    assert_success(&first);
    let before: Vec<Vec<u8>> = files.iter().map(|f| project.read_bytes(f)).collect();

    let second = run_mxwidget(&project, &["--json", "build", "--no-compile"]);
    assert_success(&second);
    let after: Vec<Vec<u8>> = files.iter().map(|f| project.read_bytes(f)).collect();

    assert_eq!(before, after);

    let digest = |out: &std::process::Output| {
        let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON report");
        report["digest"].as_str().expect("digest").to_string()
    };
    assert_eq!(digest(&first), digest(&second));
}

#[test]
fn test_missing_template_skips_only_that_artifact() {
    let project = TestProject::widget("Foo");
    project.remove_file("src-gleam/templates/package.xml");

    let output = run_mxwidget(&project, &["--json", "build", "--no-compile"]);
    assert_success(&output);

    assert!(!project.file_exists("src/package.xml"));
    assert!(project.file_exists("src/Foo.xml"));
    assert!(project.file_exists("src/ui/Foo.css"));
    assert!(project.file_exists("src/Foo.jsx"));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let skipped: Vec<&str> = report["templates"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["status"] == "skipped")
        .map(|t| t["template"].as_str().unwrap())
        .collect();
    assert_eq!(skipped, vec!["package.xml"]);
}

#[test]
fn test_missing_manifest_exits_with_code_1() {
    let project = TestProject::new();
    project.stage_compiler_output();

    let output = run_mxwidget(&project, &["build", "--no-compile"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Manifest not found"), "{stderr}");
    assert!(!project.file_exists("src"));
}

#[test]
fn test_unparsable_manifest_exits_with_code_1() {
    let project = TestProject::widget("Foo");
    project.create_file("package.json", "{ not json");

    let output = run_mxwidget(&project, &["build", "--no-compile"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse manifest"));
}

#[cfg(unix)]
#[test]
fn test_compiler_failure_exits_with_code_1() {
    let project = TestProject::widget("Foo");

    let output = run_mxwidget(&project, &["build", "--compiler", "false"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'false' failed"), "{stderr}");
    assert!(!project.file_exists("src/Foo.jsx"));
}

#[cfg(unix)]
#[test]
fn test_compiler_from_project_config() {
    let project = TestProject::widget("Foo");
    project.create_file("mxwidget.toml", "[compiler]\ncommand = \"true\"\nargs = []\n");

    let output = run_mxwidget(&project, &["build"]);

    assert_success(&output);
    assert!(project.file_exists("src/Foo.jsx"));
}

#[test]
fn test_missing_compiler_exits_with_code_1() {
    let project = TestProject::widget("Foo");

    let output = run_mxwidget(&project, &["build", "--compiler", "mxwidget-no-such-compiler"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found in PATH"));
}

#[test]
fn test_flat_layout() {
    let project = TestProject::widget("Foo");
    project.create_file(
        "src-gleam/build/dev/javascript/components/widget.mjs",
        "import * as $d from \"../gleam_stdlib/gleam/dict.mjs\";\n",
    );

    assert_success(&run_mxwidget(
        &project,
        &["build", "--no-compile", "--layout", "flat"],
    ));

    assert_eq!(
        project.read_file("src/gleam/widget.mjs"),
        "import * as $d from \"./gleam_stdlib/gleam/dict.mjs\";\n"
    );
    assert!(project.file_exists("src/gleam/react_helpers_ffi.js"));
    assert!(!project.file_exists("src/gleam/mendix"));
    assert!(project
        .read_file("src/Foo.jsx")
        .contains("from \"./gleam/widget.mjs\";"));
}

#[test]
fn test_project_dir_flag() {
    let project = TestProject::widget("Bar");
    let elsewhere = TestProject::new();
    let dir = project.path();

    let output = run_mxwidget(
        &elsewhere,
        &["-C", dir.to_str().unwrap(), "build", "--no-compile"],
    );

    assert_success(&output);
    assert!(project.file_exists("src/Bar.jsx"));
    assert!(!elsewhere.file_exists("src"));
}

#[test]
fn test_quiet_build_prints_nothing() {
    let project = TestProject::widget("Foo");

    let output = run_mxwidget(&project, &["--quiet", "build", "--no-compile"]);

    assert_success(&output);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_manifest_fields_fall_back_to_defaults() {
    let project = TestProject::widget("Foo");
    project.create_file(
        "package.json",
        r#"{ "widgetName": "Foo", "packagePath": "", "version": "" }"#,
    );

    assert_success(&run_mxwidget(&project, &["build", "--no-compile"]));

    assert!(project
        .read_file("src/Foo.xml")
        .contains(r#"id="sbtglobal.foo.Foo""#));
    assert!(project
        .read_file("src/package.xml")
        .contains(r#"version="1.0.0""#));
}

#[test]
fn test_array_manifest_exits_with_code_1() {
    let project = TestProject::widget("Foo");
    project.create_file("package.json", r#"["Foo"]"#);

    let output = run_mxwidget(&project, &["build", "--no-compile"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse manifest"));
    assert!(!project.file_exists("src/Foo.jsx"));
}

#[test]
fn test_build_warns_about_suspicious_input() {
    let project = TestProject::widget("Foo");
    project.create_file("package.json", r#"{ "widgetName": "Foo", "version": "1.0" }"#);
    project.create_file(
        "src-gleam/templates/widget.css",
        ".widget-{{WIDGET_NAME_LOWER}} { color: {{ACCENT}}; }\n",
    );

    let output = run_mxwidget(&project, &["build", "--no-compile"]);

    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'1.0' is not a valid semver version"), "{stderr}");
    assert!(stderr.contains("Unresolved placeholder {{ACCENT}} in widget.css"), "{stderr}");
    assert_eq!(
        project.read_file("src/ui/Foo.css"),
        ".widget-foo { color: {{ACCENT}}; }\n"
    );
}

#[cfg(unix)]
#[test]
fn test_verbose_json_build_keeps_stdout_parseable() {
    let project = TestProject::widget("Foo");

    let output = run_mxwidget(
        &project,
        &["--json", "-v", "build", "--compiler", "echo compiled"],
    );

    assert_success(&output);
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON report");
    assert_eq!(report["compiled"], true);
}
