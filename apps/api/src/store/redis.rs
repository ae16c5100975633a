use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;
use uuid::Uuid;

use crate::store::{ProfileKey, ProfileStore, StoreError};

const KEY_PREFIX: &str = "compass";

/// Redis-backed store. Keys look like `compass:{user_id}:{key}`.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Opens the client and checks the server is reachable.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        info!("Redis profile store connected");
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

pub fn redis_key(user_id: Uuid, key: ProfileKey) -> String {
    format!("{KEY_PREFIX}:{user_id}:{}", key.as_str())
}

#[async_trait]
impl ProfileStore for RedisStore {
    async fn get(&self, user_id: Uuid, key: ProfileKey) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(redis_key(user_id, key)).await?;
        Ok(value)
    }

    async fn set(&self, user_id: Uuid, key: ProfileKey, value: String) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(redis_key(user_id, key), value).await?;
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, key: ProfileKey) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(redis_key(user_id, key)).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_key_layout() {
        let id = Uuid::nil();
        assert_eq!(
            redis_key(id, ProfileKey::OnboardingComplete),
            "compass:00000000-0000-0000-0000-000000000000:onboardingComplete"
        );
    }
}
