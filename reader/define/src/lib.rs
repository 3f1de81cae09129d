//! Reader Definition Library
//!
//! This crate provides the declarative types used to describe cloud resource
//! accessors. Descriptor lists are consumed by the `reader-gen` crate, which
//! derives names, types and pagination strategies from them and renders the
//! Go `Reader` interface together with its paginated implementations.
//!
//! ## Core Types
//!
//! - [`Descriptor`] - One resource accessor to generate (entity, SDK service, overrides)
//! - [`ShapeMode`] - Output shape of an accessor (single item, keyed map, or sequence)
//!
//! ## Examples
//!
//! Describe the EC2 `DescribeInstances` call:
//!
//! ```
//! use reader_define::Descriptor;
//!
//! let instances = Descriptor::new("Instances")
//!     .with_service("ec2", "Describe")
//!     .with_attribute_path("Reservations#Instances")
//!     .with_documentation("GetInstances returns all EC2 instances based on the input given");
//!
//! assert_eq!(instances.entity, "Instances");
//! assert_eq!(instances.service_namespace, "ec2");
//! ```
//!
//! ## Descriptor Lists
//!
//! Concrete descriptor lists (like the AWS one) live in the separate
//! `reader-definitions` crate.

pub mod descriptor;
pub mod prelude;
pub mod shape;

pub use descriptor::{ATTRIBUTE_PATH_SEPARATOR, DEFAULT_PAGINATION_FIELD, Descriptor};
pub use shape::ShapeMode;
