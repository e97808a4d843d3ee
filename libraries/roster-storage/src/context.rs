use crate::users;
use async_trait::async_trait;
use roster_core::{error::Result, NewUser, User, UserId, UserStorage};
use sqlx::SqlitePool;

/// User storage backed by `SQLite`
#[derive(Clone)]
pub struct SqliteUserStorage {
    pool: SqlitePool,
}

impl SqliteUserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStorage for SqliteUserStorage {
    async fn insert(&self, user: NewUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn find(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn save(&self, user: &User) -> Result<bool> {
        users::update(&self.pool, user).await
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        users::delete(&self.pool, id).await
    }
}
