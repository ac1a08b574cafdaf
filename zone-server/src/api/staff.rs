use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::{EventZone, StaffAssignRequest, StaffZoneAssignment};

use super::ApiResult;
use crate::auth::Caller;
use crate::services::staff;
use crate::state::AppState;

/// Zones the calling staff member may scan at
pub async fn available_zones(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(event_id): Path<i64>,
) -> ApiResult<Vec<EventZone>> {
    Ok(Json(staff::available_zones(&state.pool, event_id, caller).await?))
}

pub async fn assign_staff(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(zone_id): Path<i64>,
    Json(req): Json<StaffAssignRequest>,
) -> Result<(StatusCode, Json<StaffZoneAssignment>), AppError> {
    let assignment = staff::assign_staff(&state.pool, zone_id, req.user_id, caller).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

pub async fn list_zone_staff(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> ApiResult<Vec<StaffZoneAssignment>> {
    Ok(Json(staff::list_zone_staff(&state.pool, zone_id).await?))
}

pub async fn remove_staff(
    State(state): State<AppState>,
    Path((zone_id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    staff::remove_staff(&state.pool, zone_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn user_assignments(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<StaffZoneAssignment>> {
    Ok(Json(staff::list_user_assignments(&state.pool, user_id).await?))
}
