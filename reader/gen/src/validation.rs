//! Pre-generation lint for descriptor lists.
//!
//! The derivation engine never rejects a descriptor: contradictory flags
//! resolve by priority and ignored overrides are dropped silently. This
//! module reports those cases so a caller can refuse them before
//! generating (the CLI does this with `--strict`).
//!
//! ## Validation Checks
//!
//! - **Empty entity**: every descriptor needs a plural entity name
//! - **Conflicting shape**: `single_result` and `is_map_result` both set
//! - **Malformed attribute path**: a `#` path that is not `Outer#Inner`
//! - **Ignored pagination override**: token fields set while pagination is suppressed
//! - **Duplicate method**: two descriptors derive the same method name
//!
//! ## Examples
//!
//! ```
//! use reader_define::Descriptor;
//! use reader_gen::validation::validate_descriptors;
//!
//! let descriptors = vec![
//!     Descriptor::new("Vpcs").with_service("ec2", "Describe"),
//!     Descriptor::new("Vpcs").with_service("ec2", "Describe"),
//! ];
//!
//! let issues = validate_descriptors(&descriptors);
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].to_string(), "Method 'GetVpcs' is declared more than once");
//! ```

use std::collections::HashSet;

use reader_define::{ATTRIBUTE_PATH_SEPARATOR, Descriptor};
use tracing::debug;

use crate::derive::method_name;
use crate::errors::GeneratorError;

/// Validates a single descriptor, returning its first issue.
///
/// `index` is the descriptor's position in its list, reported when the
/// entity is empty.
///
/// ## Errors
///
/// Returns the first of `EmptyEntity`, `ConflictingShape`,
/// `MalformedAttributePath` or `IgnoredPaginationOverride` that applies.
pub fn validate_descriptor(index: usize, descriptor: &Descriptor) -> Result<(), GeneratorError> {
    match descriptor_issues(index, descriptor).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Validates a descriptor list, returning every issue found.
///
/// Issues are reported in list order, per-descriptor checks first, then
/// duplicate method names (once per duplicated name).
pub fn validate_descriptors(descriptors: &[Descriptor]) -> Vec<GeneratorError> {
    let mut issues: Vec<GeneratorError> = descriptors
        .iter()
        .enumerate()
        .flat_map(|(index, descriptor)| descriptor_issues(index, descriptor))
        .collect();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for descriptor in descriptors {
        let name = method_name(descriptor);
        if !seen.insert(name.clone()) && reported.insert(name.clone()) {
            issues.push(GeneratorError::DuplicateMethod { name });
        }
    }

    debug!(count = descriptors.len(), issues = issues.len(), "Validated descriptors");
    issues
}

/// Turns a list of issues into a result carrying the first one.
///
/// ## Errors
///
/// Returns the first issue unchanged, so the error variant names its cause.
pub fn reject_issues(issues: Vec<GeneratorError>) -> Result<(), GeneratorError> {
    match issues.into_iter().next() {
        Some(first) => Err(first),
        None => Ok(()),
    }
}

fn descriptor_issues(index: usize, descriptor: &Descriptor) -> Vec<GeneratorError> {
    let mut issues = Vec::new();
    let entity = &descriptor.entity;

    if entity.trim().is_empty() {
        issues.push(GeneratorError::EmptyEntity { index });
    }

    if descriptor.single_result && descriptor.is_map_result {
        issues.push(GeneratorError::ConflictingShape {
            entity: entity.clone(),
        });
    }

    if let Some(path) = &descriptor.attribute_path {
        if is_malformed_path(path) {
            issues.push(GeneratorError::MalformedAttributePath {
                entity: entity.clone(),
                path: path.clone(),
            });
        }
    }

    if descriptor.suppress_pagination
        && (descriptor.pagination_token_field.is_some()
            || descriptor.pagination_input_field.is_some())
    {
        issues.push(GeneratorError::IgnoredPaginationOverride {
            entity: entity.clone(),
        });
    }

    issues
}

/// A path is malformed when it is empty, or uses `#` without splitting into
/// exactly two non-empty segments.
fn is_malformed_path(path: &str) -> bool {
    if path.trim().is_empty() {
        return true;
    }
    if !path.contains(ATTRIBUTE_PATH_SEPARATOR) {
        return false;
    }

    let segments: Vec<&str> = path.split(ATTRIBUTE_PATH_SEPARATOR).collect();
    segments.len() != 2 || segments.iter().any(|segment| segment.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{describe, make_descriptor, make_descriptor_list};

    #[test]
    fn well_formed_list_has_no_issues() {
        assert!(validate_descriptors(&make_descriptor_list()).is_empty());
    }

    #[test]
    fn empty_entity_reports_position() {
        let descriptors = vec![make_descriptor("Vpcs"), make_descriptor("")];
        let issues = validate_descriptors(&descriptors);

        assert!(matches!(issues[0], GeneratorError::EmptyEntity { index: 1 }));
    }

    #[test]
    fn conflicting_shape_is_reported() {
        let descriptor = describe("Attributes", "sqs").single_result().map_result();
        let err = validate_descriptor(0, &descriptor).unwrap_err();
        assert!(
            matches!(err, GeneratorError::ConflictingShape { entity } if entity == "Attributes")
        );
    }

    #[test]
    fn malformed_paths_are_reported() {
        for path in ["A#B#C", "#Instances", "Reservations#", ""] {
            let descriptor = make_descriptor("Things").with_attribute_path(path);
            let err = validate_descriptor(0, &descriptor).unwrap_err();
            assert!(
                matches!(err, GeneratorError::MalformedAttributePath { .. }),
                "{path:?} should be malformed"
            );
        }
    }

    #[test]
    fn dotted_and_two_segment_paths_are_fine() {
        for path in ["DistributionList.Items", "Reservations#Instances"] {
            let descriptor = make_descriptor("Things").with_attribute_path(path);
            assert!(validate_descriptor(0, &descriptor).is_ok(), "{path}");
        }
    }

    #[test]
    fn pagination_override_without_pagination_is_reported() {
        let descriptor = describe("Images", "ec2")
            .with_pagination_field("Marker")
            .without_pagination();
        let err = validate_descriptor(0, &descriptor).unwrap_err();
        assert!(matches!(err, GeneratorError::IgnoredPaginationOverride { .. }));
    }

    #[test]
    fn duplicates_are_reported_once_per_name() {
        let descriptors = vec![
            make_descriptor("Vpcs"),
            make_descriptor("Vpcs"),
            make_descriptor("Vpcs"),
            make_descriptor("Subnets"),
        ];
        let issues = validate_descriptors(&descriptors);

        assert_eq!(issues.len(), 1);
        assert!(
            matches!(&issues[0], GeneratorError::DuplicateMethod { name } if name == "GetVpcs")
        );
    }

    #[test]
    fn rejected_list_keeps_the_issue_variant() {
        let descriptors = vec![make_descriptor("Vpcs"), make_descriptor("Vpcs")];
        let err = reject_issues(validate_descriptors(&descriptors)).unwrap_err();

        assert!(matches!(err, GeneratorError::DuplicateMethod { .. }));
        assert_eq!(err.to_string(), "Method 'GetVpcs' is declared more than once");
        assert!(!err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn clean_list_is_accepted() {
        assert!(reject_issues(validate_descriptors(&make_descriptor_list())).is_ok());
    }

    #[test]
    fn explicit_names_count_for_duplicates() {
        let descriptors = vec![
            make_descriptor("Images").with_owner_filter("Owners"),
            make_descriptor("Images").with_name("GetOwnImages"),
        ];
        assert_eq!(validate_descriptors(&descriptors).len(), 1);
    }

    #[test]
    fn issues_from_one_descriptor_are_all_collected() {
        let descriptor = describe("Things", "ec2")
            .single_result()
            .map_result()
            .with_attribute_path("A#B#C");
        assert_eq!(validate_descriptors(&[descriptor]).len(), 2);
    }
}
