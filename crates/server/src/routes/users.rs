use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use service::user::{User, UserPayload};

use crate::errors::{ApiError, RecordId};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Failed to fetch users")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let list = state
        .users
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch users"))?;
    info!(count = list.len(), "list users");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserPayloadDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Username and password are required."),
        (status = 500, description = "Failed to create user")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(payload) = body?;
    let created = state
        .users
        .create(payload)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create user"))?;
    info!(id = created.id, "created user");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = crate::openapi::UserPayloadDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Failed to update user")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(payload) = body?;
    let updated = state
        .users
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update user"))?;
    info!(id = updated.id, "updated user");
    Ok(Json(updated))
}
