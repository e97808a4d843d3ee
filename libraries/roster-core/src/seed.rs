//! Demo users for a fresh database

use crate::error::{Result, RosterError};
use crate::store::UserStore;
use crate::types::NewUser;

/// Password given to every seeded account
pub const SEED_PASSWORD: &str = "password123";

/// The three demo accounts
pub fn default_users() -> Vec<NewUser> {
    vec![
        NewUser::new("John Doe", "john@example.com", SEED_PASSWORD)
            .with_age(25)
            .with_city("New York"),
        NewUser::new("Jane Smith", "jane@example.com", SEED_PASSWORD)
            .with_age(30)
            .with_city("Los Angeles"),
        NewUser::new("Bob Wilson", "bob@example.com", SEED_PASSWORD)
            .with_age(28)
            .with_city("Chicago")
            .with_active(false),
    ]
}

/// Insert the demo accounts, skipping any whose email is already taken
///
/// Returns how many were inserted.
pub async fn seed(store: &UserStore) -> Result<usize> {
    let mut inserted = 0;

    for user in default_users() {
        match store.create(user).await {
            Ok(_) => inserted += 1,
            Err(RosterError::ConstraintViolation(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
