//! Generic one-JSON-file-per-object directory.

use std::marker::PhantomData;
use std::path::PathBuf;

use fs2::FileExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};

/// A directory holding one pretty-printed JSON document per object,
/// named `{id}.json`.
///
/// Reads and writes take advisory file locks; a mutex serializes mutation
/// of the directory itself.
pub struct ObjectDir<T> {
    dir: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ObjectDir<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Create a handle over `dir`. The directory must already exist.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    fn object_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Insert or replace the object stored under `id`.
    pub async fn save(&self, id: Uuid, object: &T) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        let path = self.object_path(id);

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        serde_json::to_writer_pretty(&file, object)?;
        file.sync_all()?;
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(())
    }

    /// Load the object stored under `id`, if any.
    pub async fn load(&self, id: Uuid) -> StorageResult<Option<T>> {
        let _guard = self.lock.lock().await;
        let path = self.object_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let file = std::fs::File::open(&path)?;
        file.lock_shared()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        let object: T = serde_json::from_reader(&file)?;
        file.unlock()
            .map_err(|e| StorageError::LockFailed(e.to_string()))?;

        Ok(Some(object))
    }

    /// Load every object in the directory. Corrupt files are skipped with a
    /// warning rather than failing the whole listing.
    pub async fn list(&self) -> StorageResult<Vec<T>> {
        let _guard = self.lock.lock().await;

        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut objects = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                let file = std::fs::File::open(&path)?;
                file.lock_shared()
                    .map_err(|e| StorageError::LockFailed(e.to_string()))?;

                match serde_json::from_reader(&file) {
                    Ok(object) => objects.push(object),
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "Failed to parse object file");
                    }
                }

                file.unlock()
                    .map_err(|e| StorageError::LockFailed(e.to_string()))?;
            }
        }

        Ok(objects)
    }

    /// Delete the object stored under `id`. Returns whether a file was
    /// removed.
    pub async fn delete(&self, id: Uuid) -> StorageResult<bool> {
        let _guard = self.lock.lock().await;
        let path = self.object_path(id);

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path)?;
        Ok(true)
    }

    /// Count the objects in the directory without parsing them.
    pub async fn count(&self) -> StorageResult<u64> {
        let _guard = self.lock.lock().await;

        if !self.dir.exists() {
            return Ok(0);
        }

        let mut count = 0u64;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().extension().and_then(|e| e.to_str()) == Some("json") {
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        label: String,
    }

    fn create_test_dir() -> (ObjectDir<Doc>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let dir = ObjectDir::new(temp_dir.path().to_path_buf());
        (dir, temp_dir)
    }

    #[tokio::test]
    async fn test_object_roundtrip() {
        let (dir, _temp) = create_test_dir();
        let id = Uuid::new_v4();
        let doc = Doc {
            label: "hello".to_string(),
        };

        dir.save(id, &doc).await.unwrap();
        assert_eq!(dir.load(id).await.unwrap(), Some(doc));
        assert_eq!(dir.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let (dir, _temp) = create_test_dir();
        assert_eq!(dir.load(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let (dir, _temp) = create_test_dir();
        let id = Uuid::new_v4();
        dir.save(
            id,
            &Doc {
                label: "bye".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(dir.delete(id).await.unwrap());
        assert!(!dir.delete(id).await.unwrap());
        assert_eq!(dir.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_files() {
        let (dir, temp) = create_test_dir();
        dir.save(
            Uuid::new_v4(),
            &Doc {
                label: "ok".to_string(),
            },
        )
        .await
        .unwrap();
        std::fs::write(temp.path().join("broken.json"), b"{not json").unwrap();

        let docs = dir.list().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].label, "ok");
    }
}
