use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{ProfileKey, ProfileStore, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(Uuid, ProfileKey), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, user_id: Uuid, key: ProfileKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(&(user_id, key)).cloned())
    }

    async fn set(&self, user_id: Uuid, key: ProfileKey, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert((user_id, key), value);
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, key: ProfileKey) -> Result<(), StoreError> {
        self.entries.write().await.remove(&(user_id, key));
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
