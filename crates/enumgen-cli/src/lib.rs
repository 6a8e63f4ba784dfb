//! enumgen CLI library.
//!
//! Exposes the argument parser, runner and commands so they can be tested
//! without spawning the binary.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod runner;

pub use cli::Cli;
