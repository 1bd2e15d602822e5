//! Infrastructure layer
//!
//! Handles all I/O with the outside world: the filesystem and the external
//! compiler process.

pub mod compiler;
pub mod filesystem;
