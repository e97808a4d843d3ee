//! Roster Core
//!
//! Storage-agnostic domain types, traits, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, and the payloads that create or edit a user
//!   (`UserFields`, `NewUser`, `UserChanges`)
//! - **Storage Trait**: `UserStorage`, implemented by persistence backends
//! - **User Store**: `UserStore`, the create/find/update/delete lifecycle on top of a backend
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{NewUser, UserFields};
//!
//! let fields = UserFields {
//!     name: Some("Alice".into()),
//!     email: Some("alice@example.com".into()),
//!     password: Some("hunter2".into()),
//!     ..UserFields::default()
//! };
//!
//! let user = NewUser::from_fields(fields).unwrap();
//! assert_eq!(user.age, 0);
//! assert!(user.is_active);
//! assert!(user.city.is_none());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod seed;
pub mod storage;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, Result, RosterError};
pub use storage::UserStorage;
pub use store::{UserList, UserStore};
pub use types::{NewUser, User, UserChanges, UserFields, UserId};
