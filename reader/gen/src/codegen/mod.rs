//! Go source rendering for reader accessors.
//!
//! Each submodule renders one section of the generated file from
//! [`FunctionPlan`](crate::derive::FunctionPlan) records. Renderers never
//! look at descriptors and never re-derive values.
//!
//! ## Submodules
//!
//! - [`preamble`] - Package clause and generated-file marker
//! - [`interface`] - The `Reader` interface declaration
//! - [`function`] - One paginated method per plan
//! - [`go`] - Go identifier and comment helpers
//!
//! ## Render Flow
//!
//! 1. The preamble is rendered once via [`render_preamble`]
//! 2. All plans are declared on the interface via [`render_interface`]
//! 3. Each plan gets a body via [`render_function`], unless it opts out
//!
//! Output is gofmt-shaped text (tab indentation, one blank line between
//! declarations). See [`crate::output`] for assembly.

pub mod function;
pub mod go;
pub mod interface;
pub mod preamble;

pub use function::render_function;
pub use interface::render_interface;
pub use preamble::render_preamble;
