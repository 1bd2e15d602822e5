//! Build orchestration logic
//!
//! Runs the build as a fixed sequence of synchronous steps. The first
//! failing step aborts the build; nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::digest;
use crate::core::entrypoints;
use crate::core::layout::{BuildLayout, LayoutMode};
use crate::core::manifest::WidgetConfig;
use crate::core::relocate::{self, Relocation};
use crate::core::template::{self, TemplateOutcome};
use crate::error::MxwidgetError;
use crate::infra::compiler::OutputMode;

/// Summary of a finished build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Widget metadata the build used
    pub widget: WidgetConfig,
    /// Layout mode
    #[serde(serialize_with = "serialize_mode")]
    pub mode: LayoutMode,
    /// Whether the compiler ran
    pub compiled: bool,
    /// Files copied into the module tree
    pub copied: Vec<PathBuf>,
    /// Modules whose imports were rewritten
    pub rewritten: Vec<PathBuf>,
    /// Generated entry points
    pub entry_points: Vec<PathBuf>,
    /// Manifest template outcomes
    pub templates: Vec<TemplateOutcome>,
    /// SHA-256 of all generated files
    pub digest: String,
}

fn serialize_mode<S: serde::Serializer>(mode: &LayoutMode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(mode.as_str())
}

impl BuildReport {
    /// Manifest templates that were skipped because they were missing
    pub fn skipped_templates(&self) -> Vec<&str> {
        self.templates
            .iter()
            .filter_map(|t| match t {
                TemplateOutcome::Skipped { template } => Some(template.as_str()),
                TemplateOutcome::Rendered { .. } => None,
            })
            .collect()
    }
}

/// Build orchestrator state
#[derive(Debug)]
pub struct BuildOrchestrator {
    /// Resolved paths and settings
    layout: BuildLayout,
    /// Whether to run the compiler
    compile: bool,
    /// Compiler stdout/stderr handling
    output_mode: OutputMode,
}

impl BuildOrchestrator {
    /// Create a new build orchestrator
    pub fn new(layout: BuildLayout) -> Self {
        Self {
            layout,
            compile: true,
            output_mode: OutputMode::default(),
        }
    }

    /// Skip or run the compiler step
    #[must_use]
    pub fn with_compile(mut self, compile: bool) -> Self {
        self.compile = compile;
        self
    }

    /// Set how compiler output is handled
    #[must_use]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Run every build step in order
    pub fn run(&self) -> Result<BuildReport, MxwidgetError> {
        let layout = &self.layout;

        let widget = WidgetConfig::load(&layout.manifest_path, &layout.default_package_path)?;
        tracing::info!("Building widget: {}", widget.name);

        if self.compile {
            layout
                .compiler
                .run(&layout.compiler_project_dir, self.output_mode)?;
        } else {
            tracing::info!("Skipping compiler, reusing {}", layout.compiler_output_dir.display());
        }

        let Relocation { copied, rewritten } = relocate::relocate(layout)?;

        let entry_points =
            entrypoints::generate_entry_points(&layout.src_dir, &widget, &layout.module_paths())?;

        let templates = template::render_manifests(&layout.templates_dir, &layout.src_dir, &widget)?;

        let digest = output_digest(layout, &entry_points, &templates)?;
        tracing::info!("Build completed for widget {} ({})", widget.name, &digest[..12]);

        Ok(BuildReport {
            widget,
            mode: layout.mode,
            compiled: self.compile,
            copied,
            rewritten,
            entry_points,
            templates,
            digest,
        })
    }
}

fn output_digest(
    layout: &BuildLayout,
    entry_points: &[PathBuf],
    templates: &[TemplateOutcome],
) -> Result<String, MxwidgetError> {
    let mut files = digest::collect_files(&layout.gleam_dest_dir())?;
    files.extend(entry_points.iter().cloned());
    files.extend(templates.iter().filter_map(|t| match t {
        TemplateOutcome::Rendered { output, .. } => Some(output.clone()),
        TemplateOutcome::Skipped { .. } => None,
    }));
    Ok(digest::digest_files(&layout.src_dir, &files)?)
}

/// Files a build generates for `widget` outside the module tree, relative
/// to the widget source directory
pub fn generated_files(widget: &WidgetConfig) -> Vec<PathBuf> {
    entrypoints::EntryPoint::ALL
        .iter()
        .map(|e| PathBuf::from(e.file_name(&widget.name)))
        .chain(template::manifest_targets(widget).into_iter().map(|t| t.output))
        .collect()
}

/// Whether `src_dir` contains output of a previous build
pub fn has_build_output(src_dir: &Path, widget: &WidgetConfig) -> bool {
    src_dir.join(crate::config::defaults::GLEAM_DEST_DIR).exists()
        || generated_files(widget)
            .iter()
            .any(|f| src_dir.join(f).exists())
}
