//! External compiler invocation
//!
//! Runs the secondary-language compiler as an opaque, synchronous
//! subprocess in its project directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::defaults;
use crate::error::CompilerError;

/// How the compiler's stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Capture output; stderr is attached to a failure
    #[default]
    Capture,
    /// Pass output straight through to the terminal
    Inherit,
}

/// Compiler command wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    /// Program name or path
    program: String,
    /// Arguments passed on every invocation
    args: Vec<String>,
}

impl Compiler {
    /// Create a new compiler wrapper
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `gleam build`
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// Program name or path
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full command line, for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Locate the program on PATH, or verify an explicit path
    ///
    /// A relative path such as `./build.sh` is resolved against `cwd`, the
    /// directory the compiler runs in.
    pub fn locate(&self, cwd: &Path) -> Result<PathBuf, CompilerError> {
        which::which_in(&self.program, std::env::var_os("PATH"), cwd).map_err(|_| {
            CompilerError::NotFound {
                program: self.program.clone(),
            }
        })
    }

    /// Run the compiler in `cwd`, failing on a non-zero exit
    pub fn run(&self, cwd: &Path, mode: OutputMode) -> Result<(), CompilerError> {
        let program = self.locate(cwd)?;
        tracing::info!("Running '{}' in {}", self.command_line(), cwd.display());

        let mut cmd = Command::new(&program);
        cmd.args(&self.args).current_dir(cwd).stdin(Stdio::null());

        let (status, stderr) = match mode {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| self.spawn_error(&e))?;
                (status, String::new())
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(|e| self.spawn_error(&e))?;
                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.trim().is_empty() {
                    tracing::debug!("{} stdout:\n{}", self.program, stdout.trim_end());
                }
                (
                    output.status,
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                )
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(CompilerError::Failed {
                command: self.command_line(),
                status: status.to_string(),
                stderr,
            })
        }
    }

    fn spawn_error(&self, e: &std::io::Error) -> CompilerError {
        CompilerError::Spawn {
            program: self.program.clone(),
            error: e.to_string(),
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(
            defaults::COMPILER_COMMAND,
            defaults::COMPILER_ARGS.iter().map(|s| (*s).to_string()).collect(),
        )
    }
}
