//! User request handling
//!
//! `UserRequestHandler` turns one inbound request (an id string and/or a field
//! map) into one `UserStore` call and an outbound payload. Each call runs
//! received -> validated -> executed -> responded; a failure at any step is
//! returned as a `ServerError`, which renders as `{error, kind}`.

use crate::error::Result;
use roster_core::{NewUser, User, UserChanges, UserFields, UserId, UserStore};
use serde::Serialize;

pub const CREATED_MESSAGE: &str = "User created successfully";
pub const UPDATED_MESSAGE: &str = "User updated successfully";
pub const DELETED_MESSAGE: &str = "User deleted successfully";

pub const INDEX_TITLE: &str = "All Users";
pub const SHOW_TITLE: &str = "User Profile";
pub const CREATE_TITLE: &str = "Create New User";
pub const EDIT_TITLE: &str = "Edit User";

/// `{page_title, users, count}`
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub page_title: String,
    pub users: Vec<User>,
    pub count: usize,
}

/// `{page_title, user}`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub page_title: String,
    pub user: User,
}

/// `{message, user}`; `user` is omitted after a delete
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// View model for the create and edit forms
#[derive(Debug, Serialize)]
pub struct FormView {
    pub page_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Maps requests onto a `UserStore`
pub struct UserRequestHandler {
    users: UserStore,
}

impl UserRequestHandler {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }

    /// List every user
    pub async fn index(&self) -> Result<UserListResponse> {
        let list = self.users.find_all().await?;
        tracing::debug!(count = list.count, "listed users");

        Ok(UserListResponse {
            page_title: INDEX_TITLE.to_string(),
            users: list.users,
            count: list.count,
        })
    }

    /// Show one user by path id
    pub async fn show(&self, id: &str) -> Result<UserResponse> {
        let id: UserId = id.parse()?;
        let user = self.users.find_by_id(id).await?;
        Ok(UserResponse {
            page_title: SHOW_TITLE.to_string(),
            user,
        })
    }

    /// Create a user from a submitted field map
    pub async fn store(&self, fields: UserFields) -> Result<MutationResponse> {
        let user = NewUser::from_fields(fields)?;
        tracing::debug!(email = %user.email, "create request validated");

        let user = self.users.create(user).await?;
        tracing::info!(id = %user.id, "User created");

        Ok(MutationResponse {
            message: CREATED_MESSAGE.to_string(),
            user: Some(user),
        })
    }

    /// Overwrite the editable fields of user `id`
    pub async fn update(&self, id: &str, fields: UserFields) -> Result<MutationResponse> {
        let id: UserId = id.parse()?;
        let changes = UserChanges::from_fields(fields)?;
        tracing::debug!(%id, "update request validated");

        let user = self.users.update(id, changes).await?;
        tracing::info!(%id, "User updated");

        Ok(MutationResponse {
            message: UPDATED_MESSAGE.to_string(),
            user: Some(user),
        })
    }

    /// Delete user `id`
    pub async fn delete(&self, id: &str) -> Result<MutationResponse> {
        let id: UserId = id.parse()?;

        self.users.delete(id).await?;
        tracing::info!(%id, "User deleted");

        Ok(MutationResponse {
            message: DELETED_MESSAGE.to_string(),
            user: None,
        })
    }

    pub fn create_form(&self) -> FormView {
        FormView {
            page_title: CREATE_TITLE.to_string(),
            user: None,
        }
    }

    /// Edit form prefilled with user `id`
    pub async fn edit_form(&self, id: &str) -> Result<FormView> {
        let UserResponse { user, .. } = self.show(id).await?;
        Ok(FormView {
            page_title: EDIT_TITLE.to_string(),
            user: Some(user),
        })
    }
}
