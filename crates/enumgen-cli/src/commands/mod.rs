//! Command implementations for the enumgen CLI.

pub mod generate;
