//! Convenient re-exports for writing descriptor lists.
//!
//! ## Examples
//!
//! ```
//! use reader_define::prelude::*;
//!
//! let buckets = Descriptor::new("Buckets")
//!     .with_service("s3", "List")
//!     .without_pagination();
//!
//! assert!(buckets.suppress_pagination);
//! ```

pub use crate::descriptor::{ATTRIBUTE_PATH_SEPARATOR, DEFAULT_PAGINATION_FIELD, Descriptor};
pub use crate::shape::ShapeMode;
