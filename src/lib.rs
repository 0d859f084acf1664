//! filevalue - open files as first-class runtime values.
//!
//! Re-exports the value contract from [`filevalue_core`] and the file value
//! from [`filevalue_fs`] so a host runtime can depend on a single crate.

pub use filevalue_core::{
    BoxedValue, FileValueConfig, FileValueConfigBuilder, NoneValue, TYPE_FILE, TYPE_NONE, Type,
    UNHASHABLE, Value, ValueError, ValueResult, compare_types, content_hash,
};
pub use filevalue_fs::{FileValue, encode_base64, read_content};
