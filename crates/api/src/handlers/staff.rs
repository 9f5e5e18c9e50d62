//! Handlers for the `/staff` resource.
//!
//! Every handler requires an authenticated user. Responses always carry the
//! derived bonus amount and final salary alongside the stored fields.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use payroll_core::error::CoreError;
use payroll_core::types::DbId;
use payroll_db::models::staff::{CreateStaff, StaffResponse, UpdateStaff};
use payroll_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidatedJson;
use crate::middleware::path::PathParam;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Staff", id })
}

/// POST /staff
///
/// The response echoes the supplied bonus amount rather than the value
/// reconstructed from the stored percentage.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateStaff>,
) -> AppResult<Json<StaffResponse>> {
    let staff = StaffRepo::create(&state.pool, &input).await?;

    tracing::info!(staff_id = staff.id, user_id = auth_user.user_id, "Staff created");

    Ok(Json(StaffResponse::with_bonus_amount(
        &staff,
        input.effective_bonus_amount(),
    )))
}

/// GET /staff
pub async fn list(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<Vec<StaffResponse>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    Ok(Json(staff.iter().map(StaffResponse::from).collect()))
}

/// GET /staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<StaffResponse>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(StaffResponse::from(&staff)))
}

/// PUT /staff/{id}
///
/// Applies only the supplied fields, then recomputes the bonus percentage.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStaff>,
) -> AppResult<Json<StaffResponse>> {
    let merged = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(staff_id = id, user_id = auth_user.user_id, "Staff updated");

    Ok(Json(StaffResponse::with_bonus_amount(
        &merged.staff,
        merged.bonus_amount,
    )))
}

/// DELETE /staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if !StaffRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(staff_id = id, user_id = auth_user.user_id, "Staff deleted");
    Ok(StatusCode::NO_CONTENT)
}
