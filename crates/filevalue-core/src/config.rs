//! File value configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration carried by a file value and inherited by its copies.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FileValueConfig {
    /// Reopen copies for reading and writing instead of read-only.
    #[builder(default = "false")]
    #[serde(default)]
    pub reopen_writable: bool,

    /// Maximum number of bytes read when hashing or encoding (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_content_size: Option<u64>,
}

impl FileValueConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.max_content_size {
            return Err("Maximum content size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl FileValueConfig {
    /// Create a new config builder.
    pub fn builder() -> FileValueConfigBuilder {
        FileValueConfigBuilder::default()
    }

    /// Check whether `size` bytes may be read under this config.
    pub fn allows_size(&self, size: u64) -> bool {
        self.max_content_size.is_none_or(|limit| size <= limit)
    }
}

impl Default for FileValueConfig {
    fn default() -> Self {
        Self {
            reopen_writable: false,
            max_content_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = FileValueConfig::builder()
            .reopen_writable(true)
            .max_content_size(4096u64)
            .build()
            .unwrap();

        assert!(config.reopen_writable);
        assert_eq!(config.max_content_size, Some(4096));
    }

    #[test]
    fn test_config_rejects_zero_limit() {
        let result = FileValueConfig::builder().max_content_size(0u64).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_allows_size() {
        let config = FileValueConfig::default();
        assert!(config.allows_size(u64::MAX));

        let config = FileValueConfig::builder()
            .max_content_size(10u64)
            .build()
            .unwrap();
        assert!(config.allows_size(10));
        assert!(!config.allows_size(11));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: FileValueConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FileValueConfig::default());
    }
}
