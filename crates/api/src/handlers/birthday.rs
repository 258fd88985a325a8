//! Handlers for the `/birthday` resource.
//!
//! Bodies and path ids are extracted as `Result`s so malformed input becomes
//! a JSON `BAD_REQUEST` instead of Axum's plain-text rejection.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use birthday_core::birthday::{validate_friend_id, BirthdayPayload, ENTITY_BIRTHDAY};
use birthday_core::error::CoreError;
use birthday_core::types::DbId;
use birthday_db::models::birthday::Birthday;
use birthday_db::repositories::BirthdayRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned by a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub friend_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /birthday/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Birthday>>> {
    let birthdays = BirthdayRepo::list(&state.pool).await?;
    Ok(Json(birthdays))
}

/// GET /birthday/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Birthday>> {
    let id = friend_id_from_path(path)?;
    let birthday = BirthdayRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(birthday))
}

/// POST /birthday
///
/// Validates the body completely before touching the store.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BirthdayPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let input = payload.into_new_birthday()?;

    let created = BirthdayRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "{ENTITY_BIRTHDAY} with id {} already exists",
                input.friend_id
            )))
        })?;
    tracing::info!(friend_id = created.friend_id, "Birthday created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Birthday created successfully",
            friend_id: created.friend_id,
        }),
    ))
}

/// PUT /birthday/{id}
///
/// An unknown id is reported as 404 before the body is looked at. The
/// replacement of `fio`, `date` and `wish` is one statement, so a record
/// deleted in between still ends in 404.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<BirthdayPayload>, JsonRejection>,
) -> AppResult<Json<Birthday>> {
    let id = friend_id_from_path(path)?;
    if BirthdayRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let Json(payload) = payload.map_err(invalid_body)?;
    let fields = payload.into_fields()?;

    let birthday = BirthdayRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(not_found(id))?;
    tracing::info!(friend_id = id, "Birthday updated");

    Ok(Json(birthday))
}

/// DELETE /birthday/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<String> {
    let id = friend_id_from_path(path)?;
    if !BirthdayRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(friend_id = id, "Birthday deleted");

    Ok(format!("You have deleted birthday of friend whose id is {id}"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn friend_id_from_path(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    let Path(id) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    validate_friend_id(id)?;
    Ok(id)
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("invalid request: {}", rejection.body_text()))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_BIRTHDAY,
        id,
    })
}
