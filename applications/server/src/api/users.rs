/// Users API routes
use crate::{
    api::extract::Payload,
    error::Result,
    handler::{FormView, MutationResponse, UserListResponse, UserResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use roster_core::UserFields;
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /users/update`: the id plus the new field values
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(flatten)]
    pub fields: UserFields,
}

/// Body of `POST /users/delete`
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(default)]
    pub id: Option<Value>,
}

/// Body ids arrive as JSON numbers, JSON strings or form strings
fn id_text(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// GET /users
pub async fn index(State(app_state): State<AppState>) -> Result<Json<UserListResponse>> {
    Ok(Json(app_state.users.index().await?))
}

/// GET /users/create
pub async fn create(State(app_state): State<AppState>) -> Json<FormView> {
    Json(app_state.users.create_form())
}

/// POST /users/store
pub async fn store(
    State(app_state): State<AppState>,
    Payload(fields): Payload<UserFields>,
) -> Result<Json<MutationResponse>> {
    Ok(Json(app_state.users.store(fields).await?))
}

/// GET /users/:id
pub async fn show(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>> {
    Ok(Json(app_state.users.show(&id).await?))
}

/// GET /users/:id/edit
pub async fn edit(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<FormView>> {
    Ok(Json(app_state.users.edit_form(&id).await?))
}

/// POST /users/update
/// The id travels in the body, not the path
pub async fn update(
    State(app_state): State<AppState>,
    Payload(req): Payload<UpdateUserRequest>,
) -> Result<Json<MutationResponse>> {
    let id = id_text(req.id);
    Ok(Json(app_state.users.update(&id, req.fields).await?))
}

/// POST /users/delete
pub async fn delete(
    State(app_state): State<AppState>,
    Payload(req): Payload<DeleteUserRequest>,
) -> Result<Json<MutationResponse>> {
    let id = id_text(req.id);
    Ok(Json(app_state.users.delete(&id).await?))
}
