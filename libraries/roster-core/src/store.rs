//! User lifecycle on top of a storage backend

use crate::error::{Result, RosterError};
use crate::storage::UserStorage;
use crate::types::{NewUser, User, UserChanges, UserId};
use serde::Serialize;
use std::sync::Arc;

/// All users plus how many there are
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub count: usize,
}

/// Create, find, update and delete users
///
/// Concurrent writes to the same id are last-writer-wins: there is no version
/// check. An update whose row is deleted between load and save reports
/// `NotFound`.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn UserStorage>,
}

impl UserStore {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Persist a new user and return the stored record
    pub async fn create(&self, user: NewUser) -> Result<User> {
        user.validate()?;
        self.storage.insert(user).await
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<User> {
        self.storage
            .find(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn find_all(&self) -> Result<UserList> {
        let users = self.storage.find_all().await?;
        let count = users.len();
        Ok(UserList { users, count })
    }

    /// Overwrite the editable fields of an existing user
    pub async fn update(&self, id: UserId, changes: UserChanges) -> Result<User> {
        changes.validate()?;

        let mut user = self.find_by_id(id).await?;
        user.apply(changes);

        if !self.storage.save(&user).await? {
            return Err(not_found(id));
        }

        // Re-read so storage-maintained timestamps are current
        self.find_by_id(id).await
    }

    /// Remove a user permanently, returning the record as it was
    pub async fn delete(&self, id: UserId) -> Result<User> {
        let user = self.find_by_id(id).await?;

        if !self.storage.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(user)
    }
}

fn not_found(id: UserId) -> RosterError {
    RosterError::not_found("User", id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::storage::MockUserStorage;
    use chrono::Utc;

    fn stored(id: i64, name: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            age: 30,
            city: Some("Berlin".to_string()),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn changes(name: &str, email: &str) -> UserChanges {
        UserChanges {
            name: name.to_string(),
            email: email.to_string(),
            age: 31,
            city: None,
            is_active: false,
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_user_before_storage() {
        let mut storage = MockUserStorage::new();
        storage.expect_insert().never();

        let store = UserStore::new(Arc::new(storage));
        let err = store
            .create(NewUser::new("", "a@b.c", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn create_surfaces_constraint_violation() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_insert()
            .returning(|_| Err(RosterError::constraint("email already exists")));

        let store = UserStore::new(Arc::new(storage));
        let err = store
            .create(NewUser::new("Ada", "ada@example.com", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    }

    #[tokio::test]
    async fn find_missing_user_is_not_found() {
        let mut storage = MockUserStorage::new();
        storage.expect_find().returning(|_| Ok(None));

        let store = UserStore::new(Arc::new(storage));
        let err = store.find_by_id(UserId::new(404)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "User not found: 404");
    }

    #[tokio::test]
    async fn find_all_counts_users() {
        let mut storage = MockUserStorage::new();
        storage.expect_find_all().returning(|| {
            Ok(vec![
                stored(1, "Ada", "ada@example.com"),
                stored(2, "Grace", "grace@example.com"),
            ])
        });

        let store = UserStore::new(Arc::new(storage));
        let list = store.find_all().await.unwrap();

        assert_eq!(list.count, 2);
        assert_eq!(list.users[1].name, "Grace");
    }

    #[tokio::test]
    async fn update_keeps_password_and_id() {
        let existing = stored(5, "Ada", "ada@example.com");
        let mut after = existing.clone();
        after.apply(changes("Ada L.", "lovelace@example.com"));

        let mut storage = MockUserStorage::new();
        let mut saved = false;
        storage.expect_find().times(2).returning(move |_| {
            // first call loads, second re-reads after save
            let user = if saved { after.clone() } else { existing.clone() };
            saved = true;
            Ok(Some(user))
        });
        storage
            .expect_save()
            .withf(|user| {
                user.id == UserId::new(5)
                    && user.password == "secret"
                    && user.email == "lovelace@example.com"
            })
            .times(1)
            .returning(|_| Ok(true));

        let store = UserStore::new(Arc::new(storage));
        let updated = store
            .update(UserId::new(5), changes("Ada L.", "lovelace@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, UserId::new(5));
        assert_eq!(updated.password, "secret");
        assert_eq!(updated.name, "Ada L.");
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let mut storage = MockUserStorage::new();
        storage.expect_find().returning(|_| Ok(None));
        storage.expect_save().never();

        let store = UserStore::new(Arc::new(storage));
        let err = store
            .update(UserId::new(1), changes("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn update_racing_a_delete_is_not_found() {
        let existing = stored(3, "Ada", "ada@example.com");

        let mut storage = MockUserStorage::new();
        storage
            .expect_find()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        storage.expect_save().times(1).returning(|_| Ok(false));

        let store = UserStore::new(Arc::new(storage));
        let err = store
            .update(UserId::new(3), changes("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_returns_removed_user() {
        let existing = stored(8, "Bob", "bob@example.com");

        let mut storage = MockUserStorage::new();
        storage
            .expect_find()
            .returning(move |_| Ok(Some(existing.clone())));
        storage
            .expect_delete()
            .withf(|id| *id == UserId::new(8))
            .times(1)
            .returning(|_| Ok(true));

        let store = UserStore::new(Arc::new(storage));
        let removed = store.delete(UserId::new(8)).await.unwrap();

        assert_eq!(removed.email, "bob@example.com");
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let mut storage = MockUserStorage::new();
        storage.expect_find().returning(|_| Ok(None));
        storage.expect_delete().never();

        let store = UserStore::new(Arc::new(storage));
        let err = store.delete(UserId::new(8)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
