//! Whole-content reads and their base64 encoding.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use filevalue_core::{FileValueConfig, ValueError, ValueResult};

/// Read the current content at `path`, honoring the configured size ceiling.
///
/// Reads by path rather than through an open handle, so the result reflects
/// what is on disk now and never moves any handle's cursor. The ceiling
/// bounds the bytes actually read, so pseudo-files whose reported size is
/// zero and files that grow mid-read are still held to it.
pub fn read_content(path: &Path, config: &FileValueConfig) -> ValueResult<Vec<u8>> {
    let Some(limit) = config.max_content_size else {
        return fs::read(path).map_err(|e| ValueError::io(path, e));
    };

    let file = File::open(path).map_err(|e| ValueError::io(path, e))?;

    // Fast path: reported size already over the ceiling.
    let reported = file
        .metadata()
        .map_err(|e| ValueError::io(path, e))?
        .len();
    if !config.allows_size(reported) {
        return Err(ValueError::TooLarge {
            path: path.to_path_buf(),
            size: reported,
            limit,
        });
    }

    let mut content = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut content)
        .map_err(|e| ValueError::io(path, e))?;

    let size = content.len() as u64;
    if !config.allows_size(size) {
        return Err(ValueError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    Ok(content)
}

/// Encode raw bytes as standard padded base64.
pub fn encode_base64(content: &[u8]) -> String {
    STANDARD.encode(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"\x00\x01binary\r\n").unwrap();

        let content = read_content(&path, &FileValueConfig::default()).unwrap();
        assert_eq!(content, b"\x00\x01binary\r\n");
    }

    #[test]
    fn test_read_content_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.bin");

        let err = read_content(&path, &FileValueConfig::default()).unwrap_err();
        assert!(matches!(err, ValueError::NotFound { .. }));
    }

    #[test]
    fn test_read_content_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 64]).unwrap();

        let config = FileValueConfig::builder()
            .max_content_size(32u64)
            .build()
            .unwrap();
        let err = read_content(&path, &config).unwrap_err();
        assert!(matches!(
            err,
            ValueError::TooLarge {
                size: 64,
                limit: 32,
                ..
            }
        ));

        let config = FileValueConfig::builder()
            .max_content_size(64u64)
            .build()
            .unwrap();
        assert_eq!(read_content(&path, &config).unwrap().len(), 64);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_read_content_limit_on_unsized_file() {
        let path = Path::new("/proc/self/status");
        assert_eq!(fs::metadata(path).unwrap().len(), 0);

        let config = FileValueConfig::builder()
            .max_content_size(8u64)
            .build()
            .unwrap();
        let err = read_content(path, &config).unwrap_err();
        assert!(matches!(
            err,
            ValueError::TooLarge {
                size: 9,
                limit: 8,
                ..
            }
        ));

        let config = FileValueConfig::builder()
            .max_content_size(1024u64 * 1024)
            .build()
            .unwrap();
        assert!(!read_content(path, &config).unwrap().is_empty());
    }

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode_base64(b""), "");
    }
}
