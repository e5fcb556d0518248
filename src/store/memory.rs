//! In-memory store for tests and throwaway sessions.

use std::collections::HashMap;

use super::{StoreError, UserStore};
use crate::model::{UserData, UserId};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, UserData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl UserStore for MemoryStore {
    fn load(&self, user: &UserId) -> Result<Option<UserData>, StoreError> {
        Ok(self.documents.get(&user.id).cloned())
    }

    fn save(&mut self, user: &UserId, data: &UserData) -> Result<(), StoreError> {
        self.documents.insert(user.id.clone(), data.clone());
        Ok(())
    }
}
