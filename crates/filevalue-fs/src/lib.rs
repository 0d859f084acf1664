//! Open file handles as filevalue runtime values.
//!
//! [`FileValue`] wraps an already-open [`std::fs::File`] together with the
//! path it was opened from and implements the [`Value`] contract:
//!
//! - **Compare** orders by resource size; an inaccessible resource sorts
//!   before any accessible one and never raises an error
//! - **Hash** is an FNV-1a fingerprint of `file:` followed by the content,
//!   `0` when the content cannot be read
//! - **Copy** opens an independent handle to the same path, or yields the
//!   "none" sentinel when the path cannot be reopened
//! - **JSON** encodes the content as a base64 string and fails loudly on
//!   read errors
//!
//! ```rust,ignore
//! use std::fs::File;
//! use filevalue_fs::{FileValue, Value};
//!
//! let value = FileValue::new("data.bin", File::open("data.bin")?);
//! let copy = value.copy_value();
//! println!("{} hashes to {}", value, value.hash64());
//! ```

mod content;
mod file;

pub use content::{encode_base64, read_content};
pub use file::FileValue;

// Re-export core types
pub use filevalue_core::{
    BoxedValue, FileValueConfig, NoneValue, TYPE_FILE, UNHASHABLE, Value, ValueError,
    ValueResult,
};
