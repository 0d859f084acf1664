//! Open file handles as runtime values.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::fs::{File, Metadata, OpenOptions};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use filevalue_core::{
    BoxedValue, FileValueConfig, NoneValue, TYPE_FILE, Type, UNHASHABLE, Value, ValueError,
    ValueResult, compare_types, content_hash,
};

use crate::content::{encode_base64, read_content};

/// A value wrapping one open file handle.
///
/// The value owns its handle exclusively and closes it when dropped. The
/// path is kept alongside the handle because it is the value's string form
/// and the address used to reread or reopen the resource.
#[derive(Debug)]
pub struct FileValue {
    path: PathBuf,
    file: Option<File>,
    config: FileValueConfig,
}

impl FileValue {
    /// Wrap a handle already opened from `path`.
    pub fn new(path: impl Into<PathBuf>, file: File) -> Self {
        Self::with_config(path, file, FileValueConfig::default())
    }

    /// Wrap a handle with a custom configuration.
    pub fn with_config(path: impl Into<PathBuf>, file: File, config: FileValueConfig) -> Self {
        Self {
            path: path.into(),
            file: Some(file),
            config,
        }
    }

    /// Get the path the handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the configuration of this value.
    pub fn config(&self) -> &FileValueConfig {
        &self.config
    }

    /// Get the owned handle, `None` once closed.
    pub fn file(&self) -> Option<&File> {
        self.file.as_ref()
    }

    /// Check if the handle is still open.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Release the handle. The value stays usable with an inaccessible resource.
    pub fn close(&mut self) {
        self.file = None;
    }

    /// Consume the value and hand back its handle.
    pub fn into_file(self) -> Option<File> {
        self.file
    }

    /// Stat the resource through the handle.
    pub fn stat(&self) -> ValueResult<Metadata> {
        let file = self.file.as_ref().ok_or_else(|| ValueError::Closed {
            path: self.path.clone(),
        })?;
        file.metadata().map_err(|e| ValueError::io(self.path.clone(), e))
    }

    /// Read the full current content of the resource.
    pub fn read_content(&self) -> ValueResult<Vec<u8>> {
        read_content(&self.path, &self.config)
    }

    /// Order two file values by resource size.
    ///
    /// An inaccessible resource sorts before any accessible one; two
    /// inaccessible resources are equal.
    pub fn compare_file(&self, other: &FileValue) -> Ordering {
        match (self.stat_or_log(), other.stat_or_log()) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(ours), Some(theirs)) => ours.len().cmp(&theirs.len()),
        }
    }

    /// Open an independent handle to the same path.
    pub fn try_copy(&self) -> ValueResult<FileValue> {
        let file = OpenOptions::new()
            .read(true)
            .write(self.config.reopen_writable)
            .open(&self.path)
            .map_err(|e| ValueError::io(self.path.clone(), e))?;

        tracing::trace!(path = %self.path.display(), "reopened file handle");

        Ok(Self {
            path: self.path.clone(),
            file: Some(file),
            config: self.config.clone(),
        })
    }

    fn stat_or_log(&self) -> Option<Metadata> {
        match self.stat() {
            Ok(meta) => Some(meta),
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %err,
                    "stat failed, treating file as unavailable"
                );
                None
            }
        }
    }
}

impl fmt::Display for FileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl Value for FileValue {
    fn value_type(&self) -> Type {
        TYPE_FILE
    }

    fn compare(&self, other: &dyn Value) -> Ordering {
        match other.downcast_ref::<FileValue>() {
            Some(other) => self.compare_file(other),
            None => compare_types(self, other),
        }
    }

    fn unwrap_raw(&self) -> Option<&dyn Any> {
        self.file.as_ref().map(|file| file as &dyn Any)
    }

    fn hash64(&self) -> u64 {
        match self.read_content() {
            Ok(content) => content_hash(&TYPE_FILE, &content),
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %err,
                    "cannot hash file"
                );
                UNHASHABLE
            }
        }
    }

    fn copy_value(&self) -> BoxedValue {
        match self.try_copy() {
            Ok(copy) => Box::new(copy),
            Err(err) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %err,
                    "cannot reopen file"
                );
                NoneValue::boxed()
            }
        }
    }

    fn marshal_json(&self) -> ValueResult<Vec<u8>> {
        let content = self.read_content()?;
        Ok(serde_json::to_vec(&encode_base64(&content))?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Serialize for FileValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let content = self
            .read_content()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&encode_base64(&content))
    }
}
