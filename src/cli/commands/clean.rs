//! CLI implementation for `mxwidget clean` command
//!
//! This module handles the CLI interface for removing generated widget
//! sources.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{self, status};
use crate::core::builder::has_build_output;
use crate::core::clean::clean_widget;
use crate::core::layout::{BuildLayout, Overrides};
use crate::core::manifest::WidgetConfig;

/// Execute the clean command
pub fn execute(project_dir: &Path) -> Result<()> {
    let layout = BuildLayout::load(project_dir, &Overrides::default())
        .context("Failed to load project configuration")?;

    // The widget name decides which generated files belong to this project
    let widget = WidgetConfig::load(&layout.manifest_path, &layout.default_package_path)
        .with_context(|| {
            format!(
                "Failed to read manifest from {}",
                layout.manifest_path.display()
            )
        })?;

    // Check if there's anything to clean
    if !has_build_output(&layout.src_dir, &widget) {
        output::print_status(status::SUCCESS, "Nothing to clean");
        return Ok(());
    }

    let result =
        clean_widget(&layout.src_dir, &widget).context("Failed to clean generated sources")?;

    if output::is_json() {
        let value = serde_json::json!({ "removed": result.removed });
        println!("{value}");
    } else if result.removed.is_empty() {
        output::print_status(status::SUCCESS, "Nothing to clean");
    } else {
        output::print_status(status::SUCCESS, "Cleaned generated sources:");
        if !output::is_quiet() {
            for path in &result.removed {
                println!("  Removed {path}");
            }
        }
    }

    Ok(())
}
