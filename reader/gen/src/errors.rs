//! Error types for the reader generator.

use strum::Display;
use thiserror::Error;

/// The render pass that was running when a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RenderSection {
    /// Package declaration and generated-file marker.
    Preamble,
    /// The `Reader` interface declaration.
    Interface,
    /// A per-descriptor function body.
    Function,
}

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A derived value could not be substituted into the output.
    ///
    /// Fatal for the whole run: no partial output is returned.
    #[error("Failed to render {section} for '{entity}': {reason}")]
    RenderFailed {
        /// The pass that failed.
        section: RenderSection,
        /// Entity of the descriptor being rendered.
        entity: String,
        /// What could not be substituted.
        reason: String,
    },

    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A descriptor has no entity name.
    #[error("Descriptor at position {index} has an empty entity")]
    EmptyEntity {
        /// Position of the descriptor in the input list.
        index: usize,
    },

    /// Both `single_result` and `is_map_result` are set.
    ///
    /// The engine resolves this silently (single wins); the validation lint
    /// reports it.
    #[error(
        "Descriptor '{entity}' sets both single_result and is_map_result; single_result takes priority"
    )]
    ConflictingShape {
        /// Entity of the offending descriptor.
        entity: String,
    },

    /// An attribute path using `#` that does not split into two non-empty segments.
    #[error(
        "Descriptor '{entity}' has malformed attribute path '{path}': expected exactly two non-empty segments around '#'"
    )]
    MalformedAttributePath {
        /// Entity of the offending descriptor.
        entity: String,
        /// The attribute path as written.
        path: String,
    },

    /// Pagination field overrides on a descriptor without pagination.
    #[error(
        "Descriptor '{entity}' overrides pagination fields but suppresses pagination; the overrides are ignored"
    )]
    IgnoredPaginationOverride {
        /// Entity of the offending descriptor.
        entity: String,
    },

    /// Two descriptors derive the same method name.
    #[error("Method '{name}' is declared more than once")]
    DuplicateMethod {
        /// The duplicated method name.
        name: String,
    },

    /// Failed to serialize derived plans.
    #[error("Failed to serialize plans: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to emit generated output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Creates a [`GeneratorError::RenderFailed`] for the given pass and entity.
    pub fn render(section: RenderSection, entity: &str, reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            section,
            entity: entity.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failed_names_section_and_entity() {
        let err = GeneratorError::render(RenderSection::Function, "Instances", "bad selector");
        assert_eq!(
            err.to_string(),
            "Failed to render function for 'Instances': bad selector"
        );
    }

    #[test]
    fn conflicting_shape_mentions_priority() {
        let err = GeneratorError::ConflictingShape {
            entity: "Attributes".to_string(),
        };
        assert!(err.to_string().contains("single_result takes priority"));
    }
}
