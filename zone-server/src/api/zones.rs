use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{EventZone, EventZoneInput, ZoneDay, ZoneQrData};

use super::ApiResult;
use crate::services::{days, registry};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ZoneListQuery {
    #[serde(default)]
    pub with_stats: bool,
}

pub async fn create_zone(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(input): Json<EventZoneInput>,
) -> Result<(StatusCode, Json<EventZone>), AppError> {
    let zone = registry::create_zone(&state.pool, event_id, &input).await?;
    Ok((StatusCode::CREATED, Json(zone)))
}

/// `?with_stats=true` adds check-in, staff and rule counts per zone
pub async fn list_zones(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Query(query): Query<ZoneListQuery>,
) -> Result<Response, AppError> {
    if query.with_stats {
        let today = Local::now().date_naive();
        let zones = registry::list_zones_with_stats(&state.pool, event_id, today).await?;
        return Ok(Json(zones).into_response());
    }
    let zones = registry::list_zones(&state.pool, event_id).await?;
    Ok(Json(zones).into_response())
}

pub async fn get_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> ApiResult<EventZone> {
    Ok(Json(registry::get_zone(&state.pool, zone_id).await?))
}

pub async fn update_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
    Json(input): Json<EventZoneInput>,
) -> ApiResult<EventZone> {
    Ok(Json(registry::update_zone(&state.pool, zone_id, &input).await?))
}

pub async fn delete_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    registry::delete_zone(&state.pool, zone_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn zone_qr(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> ApiResult<ZoneQrData> {
    Ok(Json(registry::zone_qr(&state.pool, zone_id).await?))
}

pub async fn zone_days(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> ApiResult<Vec<ZoneDay>> {
    let today = Local::now().date_naive();
    Ok(Json(days::zone_days(&state.pool, zone_id, today).await?))
}
