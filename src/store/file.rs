use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Storage;
use crate::error::StoreError;

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the file atomically (temp file + rename), so an interrupted
    /// write leaves the previous value in place.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;
    use crate::store::{self, ACTIVE_LIST_KEY, LISTS_KEY};
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get(LISTS_KEY).unwrap().is_none());
    }

    #[test]
    fn set_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested").join("taskpad"));
        storage.set(ACTIVE_LIST_KEY, "\"1\"").unwrap();
        let written = std::fs::read_to_string(storage.path_for(ACTIVE_LIST_KEY)).unwrap();
        assert_eq!(written, "\"1\"");
    }

    #[test]
    fn overwrite_replaces_value_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set(LISTS_KEY, "[\"first\"]").unwrap();
        storage.set(LISTS_KEY, "[\"second\"]").unwrap();

        assert_eq!(storage.get(LISTS_KEY).unwrap().as_deref(), Some("[\"second\"]"));
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec![format!("{}.json", LISTS_KEY)]);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        std::fs::write(storage.path_for(LISTS_KEY), "not json {{{").unwrap();
        let state = store::load_state(&storage);
        assert_eq!(state.lists, AppState::default().lists);
    }

    #[test]
    fn state_survives_a_restart() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        let state = AppState {
            sidebar_collapsed: true,
            active_list_id: "2".to_string(),
            ..AppState::default()
        };
        store::save_state(&mut storage, &state);

        let reopened = FileStorage::new(dir.path());
        assert_eq!(store::load_state(&reopened), state);
    }
}
