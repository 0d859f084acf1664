//! Core types and traits for filevalue.
//!
//! This crate provides the value contract a host runtime uses to drive
//! values of any kind, together with type identity, content fingerprints,
//! configuration and errors shared by value implementations.

mod config;
mod error;
mod hash;
mod types;
mod value;

pub use config::{FileValueConfig, FileValueConfigBuilder};
pub use error::{ValueError, ValueResult};
pub use hash::{UNHASHABLE, content_hash};
pub use types::{TYPE_FILE, TYPE_NONE, Type};
pub use value::{BoxedValue, NoneValue, Value, compare_types};
