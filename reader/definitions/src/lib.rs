//! Reader Descriptor Definitions
//!
//! This crate contains the concrete descriptor lists that use the primitives
//! from `reader-define`. Each cloud provider is organized in its own module.
//!
//! ## Available Providers
//!
//! - [`aws`] - AWS SDK accessors (EC2, S3, IAM, RDS, ...)
//!
//! ## Examples
//!
//! ```
//! use reader_definitions::define_aws_reader;
//!
//! let descriptors = define_aws_reader();
//! assert!(descriptors.iter().any(|d| d.entity == "Instances"));
//! ```

pub mod aws;

pub use aws::define_aws_reader;
