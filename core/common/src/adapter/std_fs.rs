//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents)
            .map_err(|e| Error::io_msg(format!("Failed to write '{}': {}", path.display(), e)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!("Failed to get metadata for '{}': {}", path.display(), e))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_then_read_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let fs = StdFileSystem;
        assert!(!fs.exists(&path));
        fs.write(&path, "hello").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
        let m = fs.metadata(&path).unwrap();
        assert!(m.is_file());
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn test_open_append_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let fs = StdFileSystem;
        for line in ["a\n", "b\n"] {
            let mut w = fs.open_append(&path).unwrap();
            w.write_all(line.as_bytes()).unwrap();
        }
        assert_eq!(fs.read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StdFileSystem
            .read_to_string(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
