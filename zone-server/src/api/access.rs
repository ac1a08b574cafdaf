use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::{
    AttendeeZoneAccess, AttendeeZoneAccessCreate, AttendeeZoneAccessUpdate, ZoneAccessRule,
    ZoneAccessRuleInput,
};

use super::ApiResult;
use crate::services::access;
use crate::state::AppState;

// ── Category rules ──────────────────────────────────────────────

pub async fn create_rule(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
    Json(input): Json<ZoneAccessRuleInput>,
) -> Result<(StatusCode, Json<ZoneAccessRule>), AppError> {
    let rule = access::upsert_rule(&state.pool, zone_id, &input).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

pub async fn list_rules(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> ApiResult<Vec<ZoneAccessRule>> {
    Ok(Json(access::list_rules(&state.pool, zone_id).await?))
}

/// Bulk replace: the body becomes the zone's complete rule set
pub async fn replace_rules(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
    Json(rules): Json<Vec<ZoneAccessRuleInput>>,
) -> ApiResult<Vec<ZoneAccessRule>> {
    Ok(Json(access::replace_rules(&state.pool, zone_id, &rules).await?))
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(rule_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    access::delete_rule(&state.pool, rule_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Individual overrides ────────────────────────────────────────

pub async fn create_override(
    State(state): State<AppState>,
    Path(attendee_id): Path<i64>,
    Json(input): Json<AttendeeZoneAccessCreate>,
) -> Result<(StatusCode, Json<AttendeeZoneAccess>), AppError> {
    let row = access::upsert_override(&state.pool, attendee_id, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list_overrides(
    State(state): State<AppState>,
    Path(attendee_id): Path<i64>,
) -> ApiResult<Vec<AttendeeZoneAccess>> {
    Ok(Json(access::list_overrides(&state.pool, attendee_id).await?))
}

pub async fn update_override(
    State(state): State<AppState>,
    Path(override_id): Path<i64>,
    Json(input): Json<AttendeeZoneAccessUpdate>,
) -> ApiResult<AttendeeZoneAccess> {
    Ok(Json(
        access::update_override(&state.pool, override_id, &input).await?,
    ))
}

pub async fn delete_override(
    State(state): State<AppState>,
    Path(override_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    access::delete_override(&state.pool, override_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
