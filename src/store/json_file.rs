//! One pretty-printed JSON file per user.

use std::path::{Path, PathBuf};

use super::{StoreError, UserStore};
use crate::model::{UserData, UserId};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store documents under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, user: &UserId) -> PathBuf {
        self.dir.join(format!("{}.json", user.file_stem()))
    }
}

impl UserStore for JsonFileStore {
    fn load(&self, user: &UserId) -> Result<Option<UserData>, StoreError> {
        let path = self.path_for(user);
        if !path.exists() {
            log::debug!("No user data at {:?}", path);
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path)?;
        let data = serde_json::from_str(&json)?;
        log::info!("Loaded user data from {:?}", path);
        Ok(Some(data))
    }

    fn save(&mut self, user: &UserId, data: &UserData) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(user);
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&path, json)?;
        log::debug!("Saved user data to {:?}", path);
        Ok(())
    }
}
