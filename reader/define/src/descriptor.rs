//! The resource descriptor.
//!
//! A [`Descriptor`] captures everything needed to generate one accessor on
//! the `Reader` interface. Most fields are optional overrides; when they are
//! left unset the generator derives the value from the entity name and the
//! SDK service settings.

use serde::{Deserialize, Serialize};

/// Separator in an attribute path meaning "iterate the outer field and
/// collect the inner field from each element".
pub const ATTRIBUTE_PATH_SEPARATOR: char = '#';

/// Continuation token field used by most SDK list/describe calls.
pub const DEFAULT_PAGINATION_FIELD: &str = "NextToken";

/// Declarative description of one resource accessor.
///
/// Descriptors are constructed by the owner of the resource list, borrowed
/// once by the generator and then dropped. Nothing in the generator mutates
/// them.
///
/// No validation happens at construction time. Contradictory settings (for
/// example both [`single_result`](Self::single_result) and
/// [`is_map_result`](Self::is_map_result)) are resolved by a fixed priority
/// during derivation, and the optional validation lint in `reader-gen` can
/// report them.
///
/// ## Examples
///
/// Struct literal with defaults:
///
/// ```
/// use reader_define::Descriptor;
///
/// let volumes = Descriptor {
///     entity: "Volumes".to_string(),
///     service_prefix: "Describe".to_string(),
///     service_namespace: "ec2".to_string(),
///     ..Default::default()
/// };
///
/// assert!(volumes.explicit_name.is_none());
/// ```
///
/// Builder style:
///
/// ```
/// use reader_define::Descriptor;
///
/// let images = Descriptor::new("Images")
///     .with_service("ec2", "Describe")
///     .with_owner_filter("Owners")
///     .without_pagination();
///
/// assert_eq!(images.owner_filter_field.as_deref(), Some("Owners"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    /// Plural resource name, e.g. `Instances` or `SecurityGroups`.
    ///
    /// Required and expected to be non-empty.
    pub entity: String,

    /// Overrides the derived `Get{Entity}` method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_name: Option<String>,

    /// Overrides the whole interface/function signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_signature: Option<String>,

    /// Overrides the element type (e.g. `ec2.Vpc`). The shape qualifier
    /// (`*`, `[]*`, `map[string]*`) is still applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_output_type: Option<String>,

    /// Field of the SDK output holding the resources.
    ///
    /// Either a single (possibly dotted) field such as `DistributionList.Items`,
    /// or two fields joined by [`ATTRIBUTE_PATH_SEPARATOR`] such as
    /// `Reservations#Instances`, meaning "for each element of
    /// `Reservations`, collect its `Instances`". Defaults to the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_path: Option<String>,

    /// Overrides the entity part of the SDK call name. The service prefix is
    /// still prepended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_service_call_name: Option<String>,

    /// Overrides singularization of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singular_override: Option<String>,

    /// Verb prefix of the SDK call, e.g. `Describe` or `List`.
    pub service_prefix: String,

    /// SDK package identifier, e.g. `ec2`, `s3`, `cloudfront`.
    pub service_namespace: String,

    /// Input field that receives the caller's account ID before dispatch.
    ///
    /// Also switches the method name to `GetOwn{Entity}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_filter_field: Option<String>,

    /// The SDK call has no continuation-token protocol.
    pub suppress_pagination: bool,

    /// The SDK call returns one item rather than a collection.
    pub single_result: bool,

    /// The SDK call returns a keyed mapping rather than a sequence.
    pub is_map_result: bool,

    /// Output-side continuation token field. Defaults to
    /// [`DEFAULT_PAGINATION_FIELD`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token_field: Option<String>,

    /// Input-side continuation token field. Defaults to the output-side field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_input_field: Option<String>,

    /// Documentation attached to the interface method.
    pub documentation: String,

    /// Emit only the interface signature; the implementation is hand-written.
    pub skip_body_generation: bool,
}

impl Descriptor {
    /// Creates a descriptor for the given plural entity with every other
    /// field left at its default.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    /// Sets the SDK package and call prefix.
    pub fn with_service(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.service_namespace = namespace.into();
        self.service_prefix = prefix.into();
        self
    }

    /// Overrides the method name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.explicit_name = Some(name.into());
        self
    }

    /// Overrides the whole signature.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.explicit_signature = Some(signature.into());
        self
    }

    /// Overrides the element type.
    pub fn with_output_type(mut self, output: impl Into<String>) -> Self {
        self.explicit_output_type = Some(output.into());
        self
    }

    /// Sets the attribute path (`Field` or `Outer#Inner`).
    pub fn with_attribute_path(mut self, path: impl Into<String>) -> Self {
        self.attribute_path = Some(path.into());
        self
    }

    /// Overrides the entity part of the SDK call name.
    pub fn with_service_call_name(mut self, call: impl Into<String>) -> Self {
        self.explicit_service_call_name = Some(call.into());
        self
    }

    /// Overrides the singular form of the entity.
    pub fn with_singular(mut self, singular: impl Into<String>) -> Self {
        self.singular_override = Some(singular.into());
        self
    }

    /// Injects the caller's account ID into `field` before the first call.
    pub fn with_owner_filter(mut self, field: impl Into<String>) -> Self {
        self.owner_filter_field = Some(field.into());
        self
    }

    /// Overrides the output-side continuation token field.
    pub fn with_pagination_field(mut self, field: impl Into<String>) -> Self {
        self.pagination_token_field = Some(field.into());
        self
    }

    /// Overrides the input-side continuation token field.
    pub fn with_input_pagination_field(mut self, field: impl Into<String>) -> Self {
        self.pagination_input_field = Some(field.into());
        self
    }

    /// Marks the SDK call as having no continuation token.
    pub fn without_pagination(mut self) -> Self {
        self.suppress_pagination = true;
        self
    }

    /// Marks the SDK call as returning a single item.
    pub fn single_result(mut self) -> Self {
        self.single_result = true;
        self
    }

    /// Marks the SDK call as returning a keyed mapping.
    pub fn map_result(mut self) -> Self {
        self.is_map_result = true;
        self
    }

    /// Sets the interface documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    /// Emits only the interface signature for this descriptor.
    pub fn without_body(mut self) -> Self {
        self.skip_body_generation = true;
        self
    }
}
