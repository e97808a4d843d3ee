//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so migrations, the unique email index, and column defaults are exercised.

#![allow(dead_code)]

use roster_core::{NewUser, UserStore};
use roster_storage::SqliteUserStorage;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = roster_storage::create_pool(&db_url, 1)
            .await
            .expect("Failed to create pool");

        roster_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A `UserStore` over this database
    pub fn store(&self) -> UserStore {
        UserStore::new(Arc::new(SqliteUserStorage::new(self.pool.clone())))
    }
}

/// Test fixture: a valid user with the given name and email
pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(name, email, "password123")
}
