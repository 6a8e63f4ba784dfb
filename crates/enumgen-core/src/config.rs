//! Generator configuration.
//!
//! Options here are per run, not per declaration: the YAML flag is copied
//! into every declaration found in the input.
//!
//! # Examples
//!
//! ```
//! use enumgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::new("auth.go").with_yaml(true);
//! assert_eq!(config.input_name, "auth.go");
//! assert!(config.emit_yaml);
//! assert!(config.package.is_none());
//! ```

/// Default name used for inputs that do not come from a file.
const DEFAULT_INPUT_NAME: &str = "<input>";

/// Configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the input, used in diagnostics.
    ///
    /// Default: `"<input>"`
    pub input_name: String,

    /// Emit `MarshalYAML`/`UnmarshalYAML` and import `gopkg.in/yaml.v3`.
    ///
    /// Default: false
    pub emit_yaml: bool,

    /// Package name for the output.
    ///
    /// When `None`, the package clause of the input is used.
    /// Default: None
    pub package: Option<String>,
}

impl GeneratorConfig {
    /// Creates a configuration for the named input with default options.
    #[must_use]
    pub fn new(input_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            ..Self::default()
        }
    }

    /// Enables or disables YAML marshaling.
    #[must_use]
    pub const fn with_yaml(mut self, emit_yaml: bool) -> Self {
        self.emit_yaml = emit_yaml;
        self
    }

    /// Overrides the output package name.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::default().with_package(Some("models".to_string()));
    /// assert_eq!(config.package.as_deref(), Some("models"));
    /// ```
    #[must_use]
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_name: DEFAULT_INPUT_NAME.to_string(),
            emit_yaml: false,
            package: None,
        }
    }
}
