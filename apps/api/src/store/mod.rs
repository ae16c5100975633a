//! Per-user profile store.
//!
//! A small string key-value cache scoped by user id. The web client used to keep
//! these keys in browser storage; the service keeps them here so every page can
//! be computed server-side.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`, chosen at startup: Redis when
//! `REDIS_URL` is set, otherwise process memory.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod handlers;
pub mod memory;
pub mod profile;
pub mod redis;

pub use memory::MemoryStore;
pub use profile::ProfileKey;
pub use self::redis::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: Uuid, key: ProfileKey) -> Result<Option<String>, StoreError>;

    async fn set(&self, user_id: Uuid, key: ProfileKey, value: String) -> Result<(), StoreError>;

    async fn remove(&self, user_id: Uuid, key: ProfileKey) -> Result<(), StoreError>;

    /// Backend name for startup logs.
    fn backend(&self) -> &'static str;
}
