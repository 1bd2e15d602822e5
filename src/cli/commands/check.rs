//! Check command implementation
//!
//! Implements `mxwidget check` to validate the project without building.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::cli::output::{self, status};
use crate::core::check;
use crate::core::layout::{BuildLayout, Overrides};

/// Execute the check command
pub fn execute(project_dir: &Path) -> Result<()> {
    let layout = BuildLayout::load(project_dir, &Overrides::default())
        .context("Failed to load project configuration")?;

    let result = check::check(&layout);

    if output::is_json() {
        let value = serde_json::json!({
            "valid": result.is_valid(),
            "widget": result.widget,
            "manifest_error": result.manifest_error,
            "compiler": result.compiler_path,
            "compiler_output_present": result.compiler_output_present,
            "templates_present": result.templates_present,
            "templates_missing": result.templates_missing,
            "warnings": result.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if !output::is_quiet() {
        println!("Checking widget project...\n");

        match (&result.widget, &result.manifest_error) {
            (Some(widget), _) => println!(
                "{} Manifest is valid: {} {} ({})",
                status::SUCCESS,
                widget.name,
                widget.version,
                widget.package_path
            ),
            (None, Some(error)) => println!("{} {error}", status::ERROR),
            (None, None) => {}
        }

        match &result.compiler_path {
            Some(path) => println!(
                "{} Compiler found: {}",
                status::SUCCESS,
                path.display()
            ),
            None => println!(
                "{} Compiler '{}' not found in PATH",
                status::WARNING,
                layout.compiler.program()
            ),
        }

        if result.compiler_output_present {
            println!("{} Compiler output present", status::INFO);
        }

        for template in &result.templates_present {
            println!("{} Template {template}", status::SUCCESS);
        }
        for template in &result.templates_missing {
            println!(
                "{} Template {template} missing, its artifact will be skipped",
                status::WARNING
            );
        }

        for warning in &result.warnings {
            println!("{} {warning}", status::WARNING);
        }
    }

    if !result.is_valid() {
        bail!(
            "Project check failed: {}",
            result.manifest_error.as_deref().unwrap_or("invalid manifest")
        );
    }
    Ok(())
}
