//! Configuration and constants
//!
//! - [`defaults`] - Built-in defaults for paths, compiler and widget metadata

pub mod defaults;
