use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "CSV Files";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.output_dir())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl Storage for LocalStorage {
    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| ConvertError::DirectoryError {
            path: self.base_path.clone(),
            source,
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.base_path.join(name).is_file()
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(name);
        fs::write(&full_path, data).map_err(|source| ConvertError::WriteError {
            path: full_path.clone(),
            source,
        })?;
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_root_creates_nested_dirs_idempotently() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("exports").join("CSV Files"));

        storage.ensure_root().unwrap();
        storage.ensure_root().unwrap();
        assert!(storage.base_path().is_dir());
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(!storage.exists("report.csv"));
        storage.write_file("report.csv", b"old\n").unwrap();
        assert!(storage.exists("report.csv"));

        let path = storage.write_file("report.csv", b"new\n").unwrap();
        assert_eq!(path, temp_dir.path().join("report.csv"));
        assert_eq!(fs::read(&path).unwrap(), b"new\n");
    }

    #[test]
    fn test_ensure_root_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("CSV Files");
        fs::write(&blocker, b"not a directory").unwrap();

        let storage = LocalStorage::new(&blocker);
        match storage.ensure_root() {
            Err(ConvertError::DirectoryError { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected DirectoryError, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_dir_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("missing"));

        let err = storage.write_file("report.csv", b"data\n").unwrap_err();
        assert!(matches!(err, ConvertError::WriteError { .. }));
    }
}
