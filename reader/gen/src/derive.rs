//! Derivation of generated names, types and strategies from a descriptor.
//!
//! Every function here is pure: it reads only the [`Descriptor`] it is given
//! and returns the same value on every call. None of them fail; a malformed
//! descriptor yields malformed values, which the render passes (or the
//! optional [`validation`](crate::validation) lint) report.
//!
//! [`plan`] gathers every derived value into a [`FunctionPlan`], the only
//! input the render passes read.
//!
//! ## Examples
//!
//! ```
//! use reader_define::Descriptor;
//! use reader_gen::derive;
//!
//! let instances = Descriptor::new("Instances").with_service("ec2", "Describe");
//!
//! assert_eq!(derive::method_name(&instances), "GetInstances");
//! assert_eq!(derive::input_type(&instances), "ec2.DescribeInstancesInput");
//! assert_eq!(derive::output_type(&instances), "[]*ec2.Instance");
//! assert_eq!(derive::attribute_list(&instances), vec!["Instances"]);
//! ```

use reader_define::{ATTRIBUTE_PATH_SEPARATOR, DEFAULT_PAGINATION_FIELD, Descriptor, ShapeMode};
use serde::Serialize;

use crate::inflection::singularize;

/// How each fetched page is merged into the accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MergeStrategy {
    /// For each element of `output.outer`, append `element.inner` to the accumulator.
    Flatten {
        /// Field of the page output to iterate.
        outer: String,
        /// Field of each element to collect.
        inner: String,
    },
    /// Replace the accumulator with `output.field` (single and map shapes).
    Assign {
        /// Field of the page output holding the value.
        field: String,
    },
    /// Append `output.field` to the accumulator (sequence shape).
    Append {
        /// Field of the page output holding the sequence.
        field: String,
    },
}

/// Continuation token fields of a paginated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Token field read from each page output.
    pub output_field: String,
    /// Token field written into the next page input.
    pub input_field: String,
}

/// Everything the render passes need to emit one accessor.
///
/// Built by [`plan`]; the render passes read it and never look at the
/// descriptor again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionPlan {
    /// Plural entity name, used to annotate render errors.
    pub entity: String,
    /// Method name, e.g. `GetInstances`.
    pub name: String,
    /// Interface documentation text.
    pub documentation: String,
    /// Full method signature without the `func` keyword and receiver.
    pub signature: String,
    /// SDK input type, e.g. `ec2.DescribeInstancesInput`.
    pub input_type: String,
    /// Go output type including its shape qualifier, e.g. `[]*ec2.Instance`.
    pub output_type: String,
    /// Active output shape.
    pub shape: ShapeMode,
    /// SDK package and client field name, e.g. `ec2`.
    pub service: String,
    /// SDK call name without the `WithContext` suffix, e.g. `DescribeInstances`.
    pub service_call: String,
    /// Input field receiving the account ID, if any.
    pub owner_filter: Option<String>,
    /// Attribute access path segments.
    pub access_path: Vec<String>,
    /// Page merge strategy.
    pub merge: MergeStrategy,
    /// Token fields, or `None` when the call runs exactly once.
    pub pagination: Option<Pagination>,
    /// Whether a function body is emitted.
    pub generate_body: bool,
}

/// Returns the method name.
///
/// `explicit_name` if set, else `Get{Entity}`, or `GetOwn{Entity}` when the
/// descriptor filters by owner.
pub fn method_name(descriptor: &Descriptor) -> String {
    if let Some(name) = &descriptor.explicit_name {
        return name.clone();
    }

    let prefix = if descriptor.owner_filter_field.is_some() {
        "GetOwn"
    } else {
        "Get"
    };

    format!("{}{}", prefix, descriptor.entity)
}

/// Returns the singular form of the entity.
pub fn singular_entity(descriptor: &Descriptor) -> String {
    descriptor
        .singular_override
        .clone()
        .unwrap_or_else(|| singularize(&descriptor.entity))
}

/// Resolves the active output shape.
///
/// ## Priority
///
/// `single_result` wins over `is_map_result`, which wins over the default
/// sequence shape. Setting both flags is not rejected here; see
/// [`validate_descriptor`](crate::validation::validate_descriptor).
pub fn shape_mode(descriptor: &Descriptor) -> ShapeMode {
    if descriptor.single_result {
        ShapeMode::Single
    } else if descriptor.is_map_result {
        ShapeMode::Map
    } else {
        ShapeMode::Sequence
    }
}

/// Returns the element type without its shape qualifier.
///
/// `explicit_output_type` if set, else `{service}.{Singular}`.
pub fn element_type(descriptor: &Descriptor) -> String {
    descriptor.explicit_output_type.clone().unwrap_or_else(|| {
        format!(
            "{}.{}",
            descriptor.service_namespace,
            singular_entity(descriptor)
        )
    })
}

/// Returns the Go output type: the element type behind `*`, `map[string]*`
/// or `[]*` depending on the shape.
pub fn output_type(descriptor: &Descriptor) -> String {
    format!(
        "{}{}",
        shape_mode(descriptor).type_prefix(),
        element_type(descriptor)
    )
}

/// Returns the SDK call name, e.g. `DescribeInstances`.
///
/// The service prefix is always prepended, to the explicit call name if one
/// is set and to the entity otherwise.
pub fn service_call_name(descriptor: &Descriptor) -> String {
    let entity = descriptor
        .explicit_service_call_name
        .as_deref()
        .unwrap_or(&descriptor.entity);

    format!("{}{}", descriptor.service_prefix, entity)
}

/// Returns the SDK input type, e.g. `ec2.DescribeInstancesInput`.
pub fn input_type(descriptor: &Descriptor) -> String {
    format!(
        "{}.{}Input",
        descriptor.service_namespace,
        service_call_name(descriptor)
    )
}

/// Returns the method signature (without `func` and receiver).
pub fn signature(descriptor: &Descriptor) -> String {
    if let Some(signature) = &descriptor.explicit_signature {
        return signature.clone();
    }

    format!(
        "{}(ctx context.Context, input *{}) ({}, error)",
        method_name(descriptor),
        input_type(descriptor),
        output_type(descriptor)
    )
}

/// Returns true when the attribute path means "iterate outer, collect inner".
pub fn is_attribute_list_slice(descriptor: &Descriptor) -> bool {
    descriptor
        .attribute_path
        .as_deref()
        .is_some_and(|path| path.contains(ATTRIBUTE_PATH_SEPARATOR))
}

/// Returns the attribute access path segments.
///
/// - unset: `[entity]`
/// - `Outer#Inner`: `[Outer, Inner]`
/// - anything else: `[path]`
pub fn attribute_list(descriptor: &Descriptor) -> Vec<String> {
    match descriptor.attribute_path.as_deref() {
        Some(path) if is_attribute_list_slice(descriptor) => path
            .split(ATTRIBUTE_PATH_SEPARATOR)
            .map(str::to_string)
            .collect(),
        Some(path) => vec![path.to_string()],
        None => vec![descriptor.entity.clone()],
    }
}

/// Returns the output-side continuation token field.
pub fn pagination_field(descriptor: &Descriptor) -> String {
    descriptor
        .pagination_token_field
        .clone()
        .unwrap_or_else(|| DEFAULT_PAGINATION_FIELD.to_string())
}

/// Returns the input-side continuation token field, falling back to the
/// output-side one.
pub fn input_pagination_field(descriptor: &Descriptor) -> String {
    descriptor
        .pagination_input_field
        .clone()
        .unwrap_or_else(|| pagination_field(descriptor))
}

/// Returns the page merge strategy.
///
/// A two-segment path always flattens, whatever the shape. Otherwise single
/// and map shapes assign and the sequence shape appends.
pub fn merge_strategy(descriptor: &Descriptor) -> MergeStrategy {
    let path = attribute_list(descriptor);
    let first = path.first().cloned().unwrap_or_default();

    if is_attribute_list_slice(descriptor) {
        return MergeStrategy::Flatten {
            outer: first,
            inner: path.get(1).cloned().unwrap_or_default(),
        };
    }

    if shape_mode(descriptor).replaces_on_merge() {
        MergeStrategy::Assign { field: first }
    } else {
        MergeStrategy::Append { field: first }
    }
}

/// Returns the token fields, or `None` when pagination is suppressed.
pub fn pagination(descriptor: &Descriptor) -> Option<Pagination> {
    if descriptor.suppress_pagination {
        return None;
    }

    Some(Pagination {
        output_field: pagination_field(descriptor),
        input_field: input_pagination_field(descriptor),
    })
}

/// Derives the complete [`FunctionPlan`] for a descriptor.
pub fn plan(descriptor: &Descriptor) -> FunctionPlan {
    FunctionPlan {
        entity: descriptor.entity.clone(),
        name: method_name(descriptor),
        documentation: descriptor.documentation.clone(),
        signature: signature(descriptor),
        input_type: input_type(descriptor),
        output_type: output_type(descriptor),
        shape: shape_mode(descriptor),
        service: descriptor.service_namespace.clone(),
        service_call: service_call_name(descriptor),
        owner_filter: descriptor.owner_filter_field.clone(),
        access_path: attribute_list(descriptor),
        merge: merge_strategy(descriptor),
        pagination: pagination(descriptor),
        generate_body: !descriptor.skip_body_generation,
    }
}
