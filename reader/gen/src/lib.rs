//! Reader code generator library.
//!
//! This crate turns resource descriptors created with `reader-define` into
//! the Go source of a `Reader` interface and its paginated implementations.
//! Every generated accessor wraps one cloud SDK call and normalizes the
//! SDK's naming, pagination and result shape into one calling convention:
//!
//! ```text
//! GetInstances(ctx context.Context, input *ec2.DescribeInstancesInput) ([]*ec2.Instance, error)
//! ```
//!
//! ## Modules
//!
//! - [`derive`] - Derivation of names, types and merge strategies from a descriptor
//! - [`codegen`] - Render passes (preamble, interface, function bodies)
//! - [`output`] - Assembly of the passes into one source buffer
//! - [`inflection`] - Singularization of entity names
//! - [`validation`] - Opt-in lint for descriptor lists
//! - [`config`] - Package, interface and receiver names
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use reader_definitions::define_aws_reader;
//! use reader_gen::config::GeneratorConfig;
//! use reader_gen::output::generate;
//!
//! let code = generate(&define_aws_reader(), &GeneratorConfig::default()).unwrap();
//! assert!(code.contains("type Reader interface {"));
//! assert!(code.contains("func (c *connector) GetInstances("));
//! ```

pub mod codegen;
pub mod config;
pub mod derive;
pub mod errors;
pub mod inflection;
pub mod output;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use config::GeneratorConfig;
pub use derive::{FunctionPlan, MergeStrategy, Pagination};
pub use errors::{GeneratorError, RenderSection};
pub use output::generate;
