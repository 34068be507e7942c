//! Entry handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{Account, Entry, EntryKind, EntryStatus, MSG_OWNER_IMMUTABLE, MSG_OWNER_NOT_FOUND};

use crate::api::extractors::{ApiJson, ValidatedJson};
use crate::api::AppState;

/// Entry create/update request.
///
/// Fields are optional here; the entry rules decide what is missing.
#[derive(Debug, Deserialize, Validate)]
pub struct EntryRequest {
    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub value: Option<Decimal>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub owner_id: Option<Uuid>,
}

/// Status change request
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: EntryStatus,
}

/// Search parameters; `owner_id` is required
#[derive(Debug, Default, Deserialize)]
pub struct EntryQuery {
    pub owner_id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
}

/// Entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub owner_id: Option<Uuid>,
    pub value: Option<Decimal>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub registered_on: Option<NaiveDate>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            owner_id: entry.owner_id(),
            description: entry.description,
            month: entry.month,
            year: entry.year,
            value: entry.value,
            kind: entry.kind,
            status: entry.status,
            registered_on: entry.registered_on,
        }
    }
}

/// Create entry routes
pub fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search_entries).post(create_entry))
        .route(
            "/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/:id/status", put(update_entry_status))
}

/// Look up the owning account. A missing id is left for the entry rules
/// to report; an unknown id is rejected here.
async fn resolve_owner(state: &AppState, owner_id: Option<Uuid>) -> AppResult<Option<Account>> {
    let Some(id) = owner_id else {
        return Ok(None);
    };

    state
        .account_service
        .get_by_id(id)
        .await?
        .map(Some)
        .ok_or_else(|| AppError::business_rule(MSG_OWNER_NOT_FOUND))
}

async fn existing_entry(state: &AppState, id: Uuid) -> AppResult<Entry> {
    state.entry_service.get_by_id(id).await?.ok_or_not_found()
}

/// Create a new entry
pub async fn create_entry(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EntryRequest>,
) -> AppResult<(StatusCode, Json<EntryResponse>)> {
    let owner = resolve_owner(&state, payload.owner_id).await?;

    let entry = Entry {
        id: None,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        owner,
        value: payload.value,
        kind: payload.kind,
        status: payload.status,
        registered_on: Some(Utc::now().date_naive()),
    };

    let saved = state.entry_service.save(entry).await?;
    Ok((StatusCode::CREATED, Json(EntryResponse::from(saved))))
}

/// Replace the fields of an existing entry. The owner is kept; an
/// `owner_id` naming another account is rejected.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<EntryRequest>,
) -> AppResult<Json<EntryResponse>> {
    let existing = existing_entry(&state, id).await?;

    if payload
        .owner_id
        .is_some_and(|owner_id| Some(owner_id) != existing.owner_id())
    {
        return Err(AppError::business_rule(MSG_OWNER_IMMUTABLE));
    }

    let entry = Entry {
        id: existing.id,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        owner: existing.owner,
        value: payload.value,
        kind: payload.kind,
        status: payload.status.or(existing.status),
        registered_on: existing.registered_on,
    };

    let updated = state.entry_service.update(entry).await?;
    Ok(Json(EntryResponse::from(updated)))
}

/// Change only the status of an existing entry
pub async fn update_entry_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> AppResult<Json<EntryResponse>> {
    let existing = existing_entry(&state, id).await?;

    let updated = state
        .entry_service
        .update_status(existing, payload.status)
        .await?;
    Ok(Json(EntryResponse::from(updated)))
}

/// Delete an existing entry
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let existing = existing_entry(&state, id).await?;
    state.entry_service.delete(&existing).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get entry by ID
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EntryResponse>> {
    let entry = existing_entry(&state, id).await?;
    Ok(Json(EntryResponse::from(entry)))
}

/// Search an owner's entries by example
pub async fn search_entries(
    State(state): State<AppState>,
    query: Result<Query<EntryQuery>, QueryRejection>,
) -> AppResult<Json<Vec<EntryResponse>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let owner_id = query
        .owner_id
        .ok_or_else(|| AppError::validation("owner_id is required"))?;
    let owner = resolve_owner(&state, Some(owner_id)).await?;

    let template = Entry {
        description: query.description,
        month: query.month,
        year: query.year,
        owner,
        kind: query.kind,
        status: query.status,
        ..Entry::default()
    };

    let entries = state.entry_service.find_by_example(&template).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}
