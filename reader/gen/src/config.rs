//! Generator configuration.
//!
//! The defaults produce `package reader` with a `Reader` interface
//! implemented by `*connector`. Every name is checked to be a valid Go
//! identifier before rendering starts.

use crate::codegen::go::is_identifier;
use crate::errors::GeneratorError;

/// Default Go package of the generated file.
pub const DEFAULT_PACKAGE: &str = "reader";

/// Default name of the generated interface.
pub const DEFAULT_INTERFACE: &str = "Reader";

/// Default receiver type implementing the interface.
pub const DEFAULT_RECEIVER: &str = "connector";

/// Default tool name used in the generated-file marker.
pub const DEFAULT_GENERATOR: &str = "reader-gen";

/// Names used by the render passes that are not part of any descriptor.
///
/// ## Examples
///
/// ```
/// use reader_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_package("awsreader");
/// assert_eq!(config.package, "awsreader");
/// assert_eq!(config.interface, "Reader");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Go package name of the generated file.
    pub package: String,
    /// Name of the generated interface type.
    pub interface: String,
    /// Receiver type of the generated methods (used as `*receiver`).
    pub receiver: String,
    /// Tool name shown in the `// Code generated by ...` marker.
    pub generator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
            receiver: DEFAULT_RECEIVER.to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the Go package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the interface name.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = interface.into();
        self
    }

    /// Sets the receiver type.
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    /// Sets the tool name shown in the generated-file marker.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Checks that package, interface and receiver are Go identifiers and
    /// that the generator marker fits on one line.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` naming the first invalid value.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (label, value) in [
            ("package", &self.package),
            ("interface", &self.interface),
            ("receiver", &self.receiver),
        ] {
            if !is_identifier(value) {
                return Err(GeneratorError::ConfigError(format!(
                    "{label} '{value}' is not a valid Go identifier"
                )));
            }
        }

        if self.generator.trim().is_empty() || self.generator.contains('\n') {
            return Err(GeneratorError::ConfigError(format!(
                "generator name '{}' must be a non-empty single line",
                self.generator
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package, "reader");
        assert_eq!(config.interface, "Reader");
        assert_eq!(config.receiver, "connector");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn setters_override_defaults() {
        let config = GeneratorConfig::default()
            .with_package("gcpreader")
            .with_interface("Fetcher")
            .with_receiver("client")
            .with_generator("custom-gen");

        assert_eq!(config.package, "gcpreader");
        assert_eq!(config.interface, "Fetcher");
        assert_eq!(config.receiver, "client");
        assert_eq!(config.generator, "custom-gen");
    }

    #[test]
    fn invalid_package_is_rejected() {
        let err = GeneratorConfig::default()
            .with_package("my-reader")
            .validate()
            .unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
        assert!(err.to_string().contains("package 'my-reader'"));
    }

    #[test]
    fn empty_receiver_is_rejected() {
        let err = GeneratorConfig::default()
            .with_receiver("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("receiver"));
    }

    #[test]
    fn multiline_generator_is_rejected() {
        let result = GeneratorConfig::default()
            .with_generator("a\nb")
            .validate();
        assert!(result.is_err());
    }
}
