/// Handles argument parsing and command dispatch.
pub mod cli;

/// Optional project configuration file.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Component generation: parameters, planning and execution.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Class-name and props-name derivation.
pub mod naming;

/// Template rendering functionality.
pub mod renderer;

/// Input validators
pub mod validation;
