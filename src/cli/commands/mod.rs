//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod clean;
pub mod init;

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the widget and generate the Mendix widget sources
    Build {
        /// Reuse existing compiler output instead of running the compiler
        #[arg(long)]
        no_compile: bool,

        /// Output layout
        #[arg(long, value_parser = ["nested", "flat"])]
        layout: Option<String>,

        /// Compiler command line (default: "gleam build")
        #[arg(long, env = "MXWIDGET_COMPILER")]
        compiler: Option<String>,
    },

    /// Validate the project without building
    Check,

    /// Remove generated widget sources
    Clean,

    /// Write default manifest templates
    Init {
        /// Overwrite existing templates
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, project_dir: &Path) -> Result<()> {
        match self {
            Self::Build {
                no_compile,
                layout,
                compiler,
            } => {
                let options = build::BuildOptions {
                    no_compile,
                    layout,
                    compiler,
                };
                build::execute(project_dir, &options)
            }
            Self::Check => check::execute(project_dir),
            Self::Clean => clean::execute(project_dir),
            Self::Init { force } => init::execute(project_dir, force),
        }
    }
}
