//! Build command implementation
//!
//! Implements `mxwidget build` to compile the widget and generate the
//! Mendix widget sources.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{self, status};
use crate::core::builder::{BuildOrchestrator, BuildReport};
use crate::core::layout::{BuildLayout, LayoutMode, Overrides};
use crate::infra::compiler::OutputMode;

/// Build options
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Reuse existing compiler output
    pub no_compile: bool,
    /// Layout mode override
    pub layout: Option<String>,
    /// Compiler command line override
    pub compiler: Option<String>,
}

/// Execute the build command
pub fn execute(project_dir: &Path, options: &BuildOptions) -> Result<()> {
    let layout_mode = options
        .layout
        .as_deref()
        .map(str::parse::<LayoutMode>)
        .transpose()?;
    let overrides = Overrides {
        layout: layout_mode,
        compiler: options.compiler.clone(),
    };
    let layout = BuildLayout::load(project_dir, &overrides)
        .context("Failed to load project configuration")?;

    let output_mode = compiler_output_mode(output::verbosity(), output::is_json());
    let spinner = if output_mode == OutputMode::Capture {
        Some(output::create_spinner("Building widget..."))
    } else {
        None
    };

    let result = BuildOrchestrator::new(layout)
        .with_compile(!options.no_compile)
        .with_output_mode(output_mode)
        .run();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result.context("Build failed")?;

    if output::is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// Stream compiler output live when verbose, unless stdout carries JSON
fn compiler_output_mode(verbosity: u8, json: bool) -> OutputMode {
    if verbosity > 0 && !json {
        OutputMode::Inherit
    } else {
        OutputMode::Capture
    }
}

fn print_summary(report: &BuildReport) {
    output::print_status(
        status::SUCCESS,
        &format!("Built widget {}", report.widget.name),
    );
    if output::is_quiet() {
        return;
    }
    println!("  Layout: {}", report.mode);
    println!(
        "  Modules: {} copied, {} rewritten",
        report.copied.len(),
        report.rewritten.len()
    );
    for path in &report.entry_points {
        println!("  Generated: {}", path.display());
    }
    for skipped in report.skipped_templates() {
        println!("  {} Template {skipped} not found, skipped", status::WARNING);
    }
    println!("  Digest: {}", report.digest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_output_mode() {
        assert_eq!(compiler_output_mode(0, false), OutputMode::Capture);
        assert_eq!(compiler_output_mode(1, false), OutputMode::Inherit);
        assert_eq!(compiler_output_mode(2, true), OutputMode::Capture);
        assert_eq!(compiler_output_mode(0, true), OutputMode::Capture);
    }
}
