//! Core types, identifier sanitizer, and errors for enumgen.
//!
//! This crate provides the foundational types used across the enumgen
//! workspace: the in-memory description of an `// ENUM` declaration, the
//! label-to-identifier sanitizer, and the shared error hierarchy.
//!
//! # Architecture
//!
//! The core consists of:
//! - The enum model (`ValueRecord`, `EnumDeclaration`)
//! - The label sanitizer (`sanitize_identifier`, `exported_suffix`)
//! - Error hierarchy with contextual information
//! - Generator configuration and CLI exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod ident;
mod types;

pub mod cli;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use ident::{exported_suffix, sanitize_identifier};
pub use types::{EnumDeclaration, ValueRecord};
