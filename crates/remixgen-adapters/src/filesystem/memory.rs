//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use remixgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoreResult,
};

/// In-memory filesystem. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    readonly: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked read-only.
    pub fn is_readonly(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.readonly.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.readonly.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_readonly(&self, path: &Path, readonly: bool) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.files.contains_key(path) {
            return Err(not_found(path).into());
        }

        if readonly {
            inner.readonly.insert(path.to_path_buf());
        } else {
            inner.readonly.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path).into())
    }

    fn remove_file(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.remove(path).ok_or_else(|| not_found(path))?;
        inner.readonly.remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn readonly_files_reject_writes() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("f"), "1").unwrap();
        fs.set_readonly(Path::new("f"), true).unwrap();

        assert!(fs.is_readonly(Path::new("f")));
        assert!(fs.write_file(Path::new("f"), "2").is_err());

        fs.set_readonly(Path::new("f"), false).unwrap();
        fs.write_file(Path::new("f"), "2").unwrap();
        assert_eq!(fs.read_to_string(Path::new("f")).unwrap(), "2");
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.write_file(Path::new("shared"), "x").unwrap();
        assert!(other.exists(Path::new("shared")));
    }

    #[test]
    fn remove_file_clears_readonly_mark() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("f"), "x").unwrap();
        fs.set_readonly(Path::new("f"), true).unwrap();

        fs.remove_file(Path::new("f")).unwrap();

        assert!(!fs.is_readonly(Path::new("f")));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn remove_missing_file_fails() {
        assert!(MemoryFilesystem::new().remove_file(Path::new("nope")).is_err());
    }
}
