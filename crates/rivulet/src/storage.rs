//! Interface to distributed storage.

use std::io::{Read, Write};
use std::path::PathBuf;

/// Interface to distributed storage.
///
/// Depending on the implementation, an object corresponds to a file in a
/// distributed filesystem or an object in an object store; a path is the
/// filesystem path or the lookup key. Backend implementations live outside
/// this crate.
pub trait Storage {
    /// Whether an object exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// List the contents at `path`. Fails if the path does not exist.
    fn list(&self, path: &str) -> anyhow::Result<Vec<PathBuf>>;

    /// Create a new object. Fails if it already exists or the parent
    /// container is missing.
    fn create(&mut self, path: &str) -> anyhow::Result<Box<dyn Write + Send>>;

    /// Append to an existing object (optional operation). Fails if the path
    /// does not exist.
    fn append(&mut self, path: &str) -> anyhow::Result<Box<dyn Write + Send>>;

    /// Open an object for reading.
    fn open(&self, path: &str) -> anyhow::Result<Box<dyn Read + Send>>;

    /// Delete the object or container. Does nothing if the path is absent.
    fn delete(&mut self, path: &str) -> anyhow::Result<()>;

    /// Move or rename an object. Returns true if it moved.
    fn rename(&mut self, source: &str, target: &str) -> anyhow::Result<bool>;

    /// Create a container, including any missing parents.
    fn mkdirs(&mut self, path: &str) -> anyhow::Result<()>;

    /// Stop using this storage.
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Cursor;

    /// Minimal in-memory backend, enough to exercise the contract.
    #[derive(Default)]
    struct MemStorage {
        objects: BTreeMap<String, Vec<u8>>,
    }

    impl Storage for MemStorage {
        fn exists(&self, path: &str) -> bool {
            self.objects.contains_key(path)
        }

        fn list(&self, path: &str) -> anyhow::Result<Vec<PathBuf>> {
            let entries: Vec<PathBuf> = self
                .objects
                .keys()
                .filter(|key| key.starts_with(path))
                .map(PathBuf::from)
                .collect();
            anyhow::ensure!(!entries.is_empty(), "path does not exist: {}", path);
            Ok(entries)
        }

        fn create(&mut self, path: &str) -> anyhow::Result<Box<dyn Write + Send>> {
            anyhow::ensure!(!self.exists(path), "object already exists: {}", path);
            self.objects.insert(path.to_string(), Vec::new());
            Ok(Box::new(Vec::new()))
        }

        fn append(&mut self, path: &str) -> anyhow::Result<Box<dyn Write + Send>> {
            anyhow::ensure!(self.exists(path), "path does not exist: {}", path);
            Ok(Box::new(Vec::new()))
        }

        fn open(&self, path: &str) -> anyhow::Result<Box<dyn Read + Send>> {
            let data = self
                .objects
                .get(path)
                .ok_or_else(|| anyhow::anyhow!("path does not exist: {}", path))?;
            Ok(Box::new(Cursor::new(data.clone())))
        }

        fn delete(&mut self, path: &str) -> anyhow::Result<()> {
            self.objects.remove(path);
            Ok(())
        }

        fn rename(&mut self, source: &str, target: &str) -> anyhow::Result<bool> {
            match self.objects.remove(source) {
                Some(data) => {
                    self.objects.insert(target.to_string(), data);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn mkdirs(&mut self, _path: &str) -> anyhow::Result<()> {
            Ok(())
        }

        fn close(&mut self) {
            self.objects.clear();
        }
    }

    #[test]
    fn test_create_then_exists_and_list() {
        let mut storage = MemStorage::default();
        storage.create("/data/a").unwrap();
        assert!(storage.exists("/data/a"));
        assert!(storage.create("/data/a").is_err());
        assert_eq!(storage.list("/data").unwrap().len(), 1);
        assert!(storage.list("/missing").is_err());
    }

    #[test]
    fn test_delete_is_idempotent_and_rename_reports_motion() {
        let mut storage = MemStorage::default();
        storage.create("/data/a").unwrap();

        assert!(storage.rename("/data/a", "/data/b").unwrap());
        assert!(!storage.rename("/data/a", "/data/c").unwrap());
        assert!(storage.exists("/data/b"));

        storage.delete("/data/b").unwrap();
        storage.delete("/data/b").unwrap();
        assert!(!storage.exists("/data/b"));
    }
}
