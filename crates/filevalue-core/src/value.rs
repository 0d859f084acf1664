//! The value contract shared by every runtime value kind.
//!
//! A host runtime holds values as [`BoxedValue`] and drives them only
//! through the [`Value`] trait: stringify (via [`Display`](fmt::Display)),
//! compare, hash, copy and JSON encoding. Concrete kinds, such as file
//! values, implement the trait rather than extend a base type.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::error::ValueResult;
use crate::hash::content_hash;
use crate::types::{TYPE_NONE, Type};

/// An owned, type-erased runtime value.
pub type BoxedValue = Box<dyn Value>;

/// Capabilities every runtime value must provide.
pub trait Value: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Get the type marker of this value.
    fn value_type(&self) -> Type;

    /// Order this value against any other value.
    ///
    /// Must be total and must never fail. Values of a different type are
    /// ordered with [`compare_types`].
    fn compare(&self, other: &dyn Value) -> Ordering;

    /// Expose the raw underlying resource, if the value wraps one.
    fn unwrap_raw(&self) -> Option<&dyn Any>;

    /// Compute a 64-bit fingerprint, `0` when it cannot be computed.
    fn hash64(&self) -> u64;

    /// Duplicate this value without sharing mutable resource state.
    ///
    /// Best effort: returns [`NoneValue`] when duplication is impossible.
    fn copy_value(&self) -> BoxedValue;

    /// Encode this value as JSON.
    fn marshal_json(&self) -> ValueResult<Vec<u8>>;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Check if this is the "none" sentinel.
    fn is_none(&self) -> bool {
        false
    }
}

impl dyn Value {
    /// Downcast to a concrete value type.
    pub fn downcast_ref<T: Value>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Check whether this value is of concrete type `T`.
    pub fn is<T: Value>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Order two values of different kinds by their types.
pub fn compare_types(a: &dyn Value, b: &dyn Value) -> Ordering {
    a.value_type().compare(&b.value_type())
}

/// The canonical "no value" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoneValue;

impl NoneValue {
    /// Box the sentinel.
    pub fn boxed() -> BoxedValue {
        Box::new(Self)
    }
}

impl fmt::Display for NoneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("none")
    }
}

impl Value for NoneValue {
    fn value_type(&self) -> Type {
        TYPE_NONE
    }

    fn compare(&self, other: &dyn Value) -> Ordering {
        if other.is::<NoneValue>() {
            Ordering::Equal
        } else {
            compare_types(self, other)
        }
    }

    fn unwrap_raw(&self) -> Option<&dyn Any> {
        None
    }

    fn hash64(&self) -> u64 {
        content_hash(&TYPE_NONE, &[])
    }

    fn copy_value(&self) -> BoxedValue {
        Self::boxed()
    }

    fn marshal_json(&self) -> ValueResult<Vec<u8>> {
        Ok(serde_json::to_vec(&())?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_none(&self) -> bool {
        true
    }
}
