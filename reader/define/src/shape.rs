//! Output shape of a generated accessor.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The shape of the value a generated accessor returns.
///
/// Exactly one shape is active for a descriptor. The shape decides both the
/// Go output type qualifier and how each fetched page is merged into the
/// accumulator.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use reader_define::ShapeMode;
///
/// assert_eq!(ShapeMode::Sequence.to_string(), "sequence");
/// assert_eq!(ShapeMode::from_str("map").unwrap(), ShapeMode::Map);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShapeMode {
    /// A single item, returned as `*T`. Each page replaces the accumulator.
    Single,
    /// A keyed mapping, returned as `map[string]*T`. Each page replaces the accumulator.
    Map,
    /// A sequence, returned as `[]*T`. Pages are appended.
    #[default]
    Sequence,
}

impl ShapeMode {
    /// Returns true when each page replaces the accumulator instead of
    /// being appended to it.
    pub fn replaces_on_merge(self) -> bool {
        matches!(self, Self::Single | Self::Map)
    }

    /// Returns the Go type qualifier placed in front of the element type.
    pub fn type_prefix(self) -> &'static str {
        match self {
            Self::Single => "*",
            Self::Map => "map[string]*",
            Self::Sequence => "[]*",
        }
    }
}
