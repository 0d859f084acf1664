//! FNV-1a content fingerprints.
//!
//! A fingerprint covers the value's type name, a `:` separator and the raw
//! content, so equal bytes held by different value kinds hash apart. This is
//! a deduplication accelerator, not a security primitive.

use std::hash::Hasher;

use fnv::FnvHasher;

use crate::types::Type;

/// Hash value reserved for "could not be hashed".
pub const UNHASHABLE: u64 = 0;

/// Compute the FNV-1a 64-bit fingerprint of `content` tagged with `ty`.
pub fn content_hash(ty: &Type, content: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(ty.name().as_bytes());
    hasher.write(b":");
    hasher.write(content);
    hasher.finish()
}
