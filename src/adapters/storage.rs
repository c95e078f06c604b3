use crate::core::Storage;
use std::fs;
use std::path::Path;

/// Reads input files straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        // Invalid UTF-8 surfaces as io::ErrorKind::InvalidData.
        fs::read_to_string(path)
    }
}
