//! Type identity for runtime values.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Type tag of file values.
pub const TYPE_FILE: Type = Type::new("file");

/// Type tag of the "none" sentinel.
pub const TYPE_NONE: Type = Type::new("none");

/// A fixed type marker used for dispatch and cross-type ordering.
///
/// Two types are the same type when their names are equal, so every
/// value kind must pick a name no other kind uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Type {
    name: &'static str,
}

impl Type {
    /// Create a new type marker.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Get the type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Order two types relative to each other.
    ///
    /// Values of different kinds sort by their type names.
    pub fn compare(&self, other: &Type) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
