//! Default configuration values

/// Widget manifest file name, relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Optional project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "mxwidget.toml";

/// Directory holding the Gleam project, relative to the project root
pub const COMPILER_PROJECT_DIR: &str = "src-gleam";

/// Widget source directory consumed by the Mendix widget tooling
pub const WIDGET_SRC_DIR: &str = "src";

/// Manifest templates directory
pub const TEMPLATES_DIR: &str = "src-gleam/templates";

/// Hand-written JavaScript FFI helpers
pub const FFI_DIR: &str = "src-gleam/js_ffi";

/// Where the compiler writes its JavaScript output
pub const COMPILER_OUTPUT_DIR: &str = "src-gleam/build/dev/javascript";

/// Compiler program
pub const COMPILER_COMMAND: &str = "gleam";

/// Compiler arguments
pub const COMPILER_ARGS: &[&str] = &["build"];

/// Name of the compiled project's directory inside the compiler output
pub const PACKAGE_DIR: &str = "components";

/// Standard library directory inside the compiler output
pub const STDLIB_DIR: &str = "gleam_stdlib";

/// Runtime prelude module inside the compiler output
pub const PRELUDE_FILE: &str = "prelude.mjs";

/// Relocated module tree, relative to the widget source directory
pub const GLEAM_DEST_DIR: &str = "gleam";

/// Stylesheet directory, relative to the widget source directory
pub const UI_DIR: &str = "ui";

/// Widget module in the nested layout, relative to the module tree
pub const NESTED_WIDGET_MODULE: &str = "mendix/widget.mjs";

/// Editor config module in the nested layout
pub const NESTED_EDITOR_CONFIG_MODULE: &str = "mendix/editor_config.mjs";

/// Widget module in the flat layout
pub const FLAT_WIDGET_MODULE: &str = "widget.mjs";

/// Editor config module in the flat layout
pub const FLAT_EDITOR_CONFIG_MODULE: &str = "editor_config.mjs";

/// FFI helpers placed next to the module directory that imports them
/// in the nested layout: (file name, module directory)
pub const NESTED_FFI_PLACEMENTS: &[(&str, &str)] = &[
    ("react_helpers_ffi.js", "utils"),
    ("build_helpers_ffi.js", "build"),
];

/// Package path used when the manifest has none
pub const DEFAULT_PACKAGE_PATH: &str = "sbtglobal";

/// Version used when the manifest has none
pub const DEFAULT_VERSION: &str = "1.0.0";
