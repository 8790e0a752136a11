use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use common::types::Message;
use service::company::{Company, CompanyPayload};

use crate::errors::{ApiError, RecordId};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "All companies", body = [crate::openapi::CompanyDoc]),
        (status = 500, description = "Failed to fetch companies")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    let list = state
        .companies
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch companies"))?;
    info!(count = list.len(), "list companies");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyPayloadDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Failed to create company")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CompanyPayload>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let Json(payload) = body?;
    let created = state
        .companies
        .create(payload)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create company"))?;
    info!(id = created.id, "created company");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Failed to fetch company")
    )
)]
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Json<Company>, ApiError> {
    let found = state
        .companies
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch company"))?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = crate::openapi::CompanyPayloadDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Failed to update company")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Result<Json<CompanyPayload>, JsonRejection>,
) -> Result<Json<Company>, ApiError> {
    let Json(payload) = body?;
    let updated = state
        .companies
        .update(id, payload)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update company"))?;
    info!(id = updated.id, "updated company");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Company not found"),
        (status = 500, description = "Failed to delete company")
    )
)]
pub async fn delete(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Json<Message>, ApiError> {
    state
        .companies
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to delete company"))?;
    info!(id, "deleted company");
    Ok(Json(Message { message: "Company deleted successfully" }))
}
