use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use super::KeyValueStore;
use crate::error::StoreError;

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        // Each write stages its own file so overlapping saves never share
        // a tmp path; the last rename wins.
        let tmp = self.dir.join(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&tmp, value).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Task;
    use crate::store::{TASKS_KEY, TaskStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get(TASKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = FileStore::new(&nested);

        store.set(TASKS_KEY, "[]".into()).await.unwrap();

        assert!(nested.join("tasks.json").exists());
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 1);
        assert_eq!(store.get(TASKS_KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn task_store_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(Arc::new(FileStore::new(dir.path())));

        let mut done = Task::new("Buy milk");
        done.toggle();
        let tasks = vec![Task::new("Walk dog"), done];
        store.save(&tasks).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, tasks);
    }

    #[tokio::test]
    async fn unreadable_content_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "not json").unwrap();
        let store = TaskStore::new(Arc::new(FileStore::new(dir.path())));
        assert!(store.load().await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_saves_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(Arc::new(FileStore::new(dir.path())));
        let short: Vec<Task> = vec![Task::new("only")];
        let long: Vec<Task> = (0..40).map(|i| Task::new(format!("task {}", i))).collect();

        for _ in 0..50 {
            let a = {
                let store = store.clone();
                let tasks = short.clone();
                tokio::spawn(async move { store.save(&tasks).await })
            };
            let b = {
                let store = store.clone();
                let tasks = long.clone();
                tokio::spawn(async move { store.save(&tasks).await })
            };
            assert!(a.await.unwrap().is_ok());
            assert!(b.await.unwrap().is_ok());

            let loaded = store.load().await.unwrap();
            assert!(loaded == short || loaded == long);
        }

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name != "tasks.json")
            .collect();
        assert!(leftovers.is_empty(), "stray files: {:?}", leftovers);
    }
}
