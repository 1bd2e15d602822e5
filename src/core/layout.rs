//! Build layout resolution
//!
//! Combines built-in defaults, mxwidget.toml and command-line overrides into
//! the concrete paths and settings of one build.
//! Precedence: command line, then mxwidget.toml, then defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::defaults;
use crate::core::entrypoints::ModulePaths;
use crate::core::project_config::{FfiPlacement, ProjectConfig};
use crate::error::ConfigError;
use crate::infra::compiler::Compiler;

/// How compiled output is arranged below `<src>/gleam`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Package sub-trees preserved; FFI helpers placed per module directory
    #[default]
    Nested,
    /// Top-level modules only; FFI helpers copied alongside them
    Flat,
}

impl LayoutMode {
    /// Lowercase name as used in config and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nested => "nested",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(Self::Nested),
            "flat" => Ok(Self::Flat),
            other => Err(ConfigError::UnknownLayout(other.to_string())),
        }
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Layout mode
    pub layout: Option<LayoutMode>,
    /// Compiler command line (e.g. `gleam build`)
    pub compiler: Option<String>,
}

/// Resolved settings for one build
#[derive(Debug, Clone)]
pub struct BuildLayout {
    /// Project root
    pub project_dir: PathBuf,
    /// Widget manifest
    pub manifest_path: PathBuf,
    /// Directory the compiler runs in
    pub compiler_project_dir: PathBuf,
    /// Widget source directory
    pub src_dir: PathBuf,
    /// Manifest templates
    pub templates_dir: PathBuf,
    /// FFI helpers
    pub ffi_dir: PathBuf,
    /// Compiler JavaScript output
    pub compiler_output_dir: PathBuf,
    /// Layout mode
    pub mode: LayoutMode,
    /// Compiled project directory name inside the compiler output
    pub package_dir_name: String,
    /// Widget module relative to the module tree
    pub widget_module: String,
    /// Editor config module relative to the module tree
    pub editor_config_module: String,
    /// FFI helper placements (nested layout)
    pub ffi_placements: Vec<FfiPlacement>,
    /// Compiler command
    pub compiler: Compiler,
    /// Package path used when the manifest has none
    pub default_package_path: String,
}

fn join_or(base: &Path, configured: Option<&String>, default: &str) -> PathBuf {
    base.join(configured.map_or(default, String::as_str))
}

impl BuildLayout {
    /// Resolve the layout for `project_dir`
    pub fn resolve(
        project_dir: &Path,
        config: &ProjectConfig,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let mode = match (overrides.layout, config.layout.mode.as_deref()) {
            (Some(mode), _) => mode,
            (None, Some(configured)) => configured.parse()?,
            (None, None) => LayoutMode::default(),
        };

        let compiler = if let Some(line) = &overrides.compiler {
            Compiler::from_command_line(line).ok_or(ConfigError::EmptyCompiler)?
        } else if let Some(command) = &config.compiler.command {
            if command.trim().is_empty() {
                return Err(ConfigError::EmptyCompiler);
            }
            Compiler::new(
                command.trim(),
                config.compiler.args.clone().unwrap_or_default(),
            )
        } else {
            let mut compiler = Compiler::default();
            if let Some(args) = &config.compiler.args {
                compiler = Compiler::new(compiler.program(), args.clone());
            }
            compiler
        };

        let (default_widget_module, default_editor_module) = match mode {
            LayoutMode::Nested => (
                defaults::NESTED_WIDGET_MODULE,
                defaults::NESTED_EDITOR_CONFIG_MODULE,
            ),
            LayoutMode::Flat => (
                defaults::FLAT_WIDGET_MODULE,
                defaults::FLAT_EDITOR_CONFIG_MODULE,
            ),
        };

        let paths = &config.paths;
        let layout = &config.layout;

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            manifest_path: join_or(project_dir, paths.manifest.as_ref(), defaults::MANIFEST_FILE),
            compiler_project_dir: join_or(
                project_dir,
                paths.compiler_project.as_ref(),
                defaults::COMPILER_PROJECT_DIR,
            ),
            src_dir: join_or(project_dir, paths.widget_src.as_ref(), defaults::WIDGET_SRC_DIR),
            templates_dir: join_or(project_dir, paths.templates.as_ref(), defaults::TEMPLATES_DIR),
            ffi_dir: join_or(project_dir, paths.ffi.as_ref(), defaults::FFI_DIR),
            compiler_output_dir: join_or(
                project_dir,
                paths.compiler_output.as_ref(),
                defaults::COMPILER_OUTPUT_DIR,
            ),
            mode,
            package_dir_name: layout
                .package_dir
                .clone()
                .unwrap_or_else(|| defaults::PACKAGE_DIR.to_string()),
            widget_module: layout
                .widget_module
                .clone()
                .unwrap_or_else(|| default_widget_module.to_string()),
            editor_config_module: layout
                .editor_config_module
                .clone()
                .unwrap_or_else(|| default_editor_module.to_string()),
            ffi_placements: layout.ffi.clone().unwrap_or_else(|| {
                defaults::NESTED_FFI_PLACEMENTS
                    .iter()
                    .map(|(file, dir)| FfiPlacement {
                        file: (*file).to_string(),
                        module_dir: (*dir).to_string(),
                    })
                    .collect()
            }),
            compiler,
            default_package_path: config
                .widget
                .default_package_path
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_PACKAGE_PATH.to_string()),
        })
    }

    /// Load mxwidget.toml from `project_dir` and resolve
    pub fn load(project_dir: &Path, overrides: &Overrides) -> Result<Self, ConfigError> {
        let config = ProjectConfig::load(project_dir)?;
        Self::resolve(project_dir, &config, overrides)
    }

    /// Relocated module tree (`<src>/gleam`)
    pub fn gleam_dest_dir(&self) -> PathBuf {
        self.src_dir.join(defaults::GLEAM_DEST_DIR)
    }

    /// Compiled project directory inside the compiler output
    pub fn package_dir(&self) -> PathBuf {
        self.compiler_output_dir.join(&self.package_dir_name)
    }

    /// Standard library inside the compiler output
    pub fn stdlib_dir(&self) -> PathBuf {
        self.compiler_output_dir.join(defaults::STDLIB_DIR)
    }

    /// Prelude inside the compiler output
    pub fn prelude_path(&self) -> PathBuf {
        self.compiler_output_dir.join(defaults::PRELUDE_FILE)
    }

    /// Import paths used by the generated entry points
    pub fn module_paths(&self) -> ModulePaths {
        ModulePaths {
            widget: format!("{}/{}", defaults::GLEAM_DEST_DIR, self.widget_module),
            editor_config: format!("{}/{}", defaults::GLEAM_DEST_DIR, self.editor_config_module),
        }
    }
}
