//! Shared test utilities for reader-gen tests.
//!
//! Common descriptor and plan fixtures, so each test module builds the same
//! shapes the same way.

use reader_define::Descriptor;

use crate::config::GeneratorConfig;
use crate::derive::{FunctionPlan, plan};

/// Creates an EC2 descriptor for the given entity with `Describe` calls.
pub fn make_descriptor(entity: &str) -> Descriptor {
    Descriptor::new(entity).with_service("ec2", "Describe")
}

/// Creates a descriptor for the given entity on the given SDK package,
/// using the `Describe` call prefix.
///
/// ## Arguments
///
/// * `entity` - Plural entity name (e.g. `Instances`)
/// * `namespace` - SDK package and client field (e.g. `ec2`)
pub fn describe(entity: &str, namespace: &str) -> Descriptor {
    Descriptor::new(entity).with_service(namespace, "Describe")
}

/// Derives the plan for [`describe`].
pub fn make_plan(entity: &str, namespace: &str) -> FunctionPlan {
    plan(&describe(entity, namespace))
}

/// Returns the default configuration.
pub fn make_config() -> GeneratorConfig {
    GeneratorConfig::default()
}

/// A small descriptor list covering each merge strategy and the owner filter.
pub fn make_descriptor_list() -> Vec<Descriptor> {
    vec![
        describe("Instances", "ec2")
            .with_attribute_path("Reservations#Instances")
            .with_documentation("GetInstances returns all EC2 instances based on the input given"),
        Descriptor::new("Buckets")
            .with_service("s3", "List")
            .with_owner_filter("Owner")
            .without_pagination()
            .with_documentation("GetOwnBuckets returns all S3 buckets owned by the account"),
        Descriptor::new("QueueAttributes")
            .with_service("sqs", "Get")
            .with_service_call_name("QueueAttributes")
            .with_attribute_path("Attributes")
            .with_output_type("string")
            .map_result()
            .without_pagination()
            .with_documentation("GetQueueAttributes returns the attributes of an SQS queue"),
    ]
}
