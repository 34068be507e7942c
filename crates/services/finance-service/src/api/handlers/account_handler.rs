//! Account handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{Account, AccountResponse};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Account registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAccountRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub credential: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub credential: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/authenticate", post(authenticate))
        .route("/:id", get(get_account))
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterAccountRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let candidate = Account::new(payload.name, payload.email, payload.credential);
    let account = state.account_service.register(candidate).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Check email and credential, returning the account on success
pub async fn authenticate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthenticateRequest>,
) -> AppResult<Json<AccountResponse>> {
    let account = state
        .account_service
        .authenticate(&payload.email, &payload.credential)
        .await?;

    Ok(Json(AccountResponse::from(account)))
}

/// Get account by ID
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(AccountResponse::from(account)))
}
