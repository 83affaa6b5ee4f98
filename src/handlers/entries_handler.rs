use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    extractors::AdminSession,
    models::{Entry, EntryInput, EntryMutationResponse, WeekBucket},
    AppResult, AppState,
};

/// GET /api/entries - All entries grouped into week buckets
#[utoipa::path(
    get,
    path = "/api/entries",
    responses(
        (status = 200, description = "Entries grouped by ISO week, oldest week first", body = Vec<WeekBucket>)
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<WeekBucket>>> {
    let weeks = state.service.list_grouped_by_week().await?;
    Ok(Json(weeks))
}

/// GET /api/entries/{id} - Fetch a single entry
#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "The entry", body = Entry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<Entry>> {
    let entry = state.service.entry(entry_id).await?;
    Ok(Json(entry))
}

/// POST /api/entries - Create a new entry
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = EntryInput,
    responses(
        (status = 200, description = "Entry created successfully", body = Entry),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Invalid entry data")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
    Json(input): Json<EntryInput>,
) -> AppResult<Json<Entry>> {
    let entry = state.service.create_entry(session.is_admin, &input).await?;
    Ok(Json(entry))
}

/// PUT /api/entries/{id} - Replace an entry's date, type and text
#[utoipa::path(
    put,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    request_body = EntryInput,
    responses(
        (status = 200, description = "Entry updated successfully", body = Entry),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Entry not found"),
        (status = 422, description = "Invalid entry data")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
    session: AdminSession,
    Json(input): Json<EntryInput>,
) -> AppResult<Json<Entry>> {
    let entry = state
        .service
        .update_entry(session.is_admin, entry_id, &input)
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/entries/{id} - Delete an entry
#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted successfully", body = EntryMutationResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
    session: AdminSession,
) -> AppResult<Json<EntryMutationResponse>> {
    state.service.delete_entry(session.is_admin, entry_id).await?;

    Ok(Json(EntryMutationResponse {
        success: true,
        message: Some("Entry deleted successfully".to_string()),
    }))
}
