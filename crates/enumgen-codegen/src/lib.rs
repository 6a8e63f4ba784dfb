//! Code generation for `// ENUM` declarations.
//!
//! Scans source text for declaration comments and renders a safe Go enum
//! type for each one using Handlebars templates.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::EnumGenerator;
//! use enumgen_core::GeneratorConfig;
//!
//! let source = "package auth\n\n// ENUM AuthType (unknown, plain, digest-md5)\n";
//! let generator = EnumGenerator::new().unwrap();
//! let generated = generator.generate(source, &GeneratorConfig::default()).unwrap();
//!
//! assert_eq!(generated.package, "auth");
//! assert!(generated.content.contains("type AuthType struct"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod go;
pub mod package;
pub mod scanner;
pub mod template_engine;
pub mod types;

pub use generator::EnumGenerator;
pub use package::package_name;
pub use scanner::DeclarationScanner;
pub use types::GeneratedSource;
