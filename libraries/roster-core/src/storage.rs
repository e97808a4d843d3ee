//! Storage trait for user persistence

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Persistence backend for user records
///
/// Implementations own identity assignment, timestamps, and the unique email
/// constraint. `UserStore` builds the user lifecycle on top of these primitives.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Insert a new record and return it as stored (with `id` and timestamps)
    ///
    /// Fails with `ConstraintViolation` when the email is already taken.
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Look up a record by id
    async fn find(&self, id: UserId) -> Result<Option<User>>;

    /// All records, in insertion order
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Persist the editable fields of an existing record
    ///
    /// The stored password is never written by this call. Returns `false` when
    /// no row has `user.id`.
    async fn save(&self, user: &User) -> Result<bool>;

    /// Remove a record. Returns `false` when no row had that id.
    async fn delete(&self, id: UserId) -> Result<bool>;
}
