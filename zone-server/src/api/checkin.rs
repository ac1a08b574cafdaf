//! Check-in endpoints
//!
//! The scan endpoint always answers with a [`ZoneCheckInResponse`] body so
//! scanner clients can show `error` directly; the status code still carries
//! the failure class (400, 404, 403, 500).

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{MovementHistoryEntry, ZoneCheckInRequest, ZoneCheckInResponse, ZoneCheckin};

use super::ApiResult;
use crate::auth::Caller;
use crate::services::checkin;
use crate::state::AppState;

pub async fn check_in(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<ZoneCheckInRequest>, JsonRejection>,
) -> (StatusCode, Json<ZoneCheckInResponse>) {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Malformed check-in request");
            let err = AppError::invalid_request("Invalid request");
            return (err.http_status(), Json(ZoneCheckInResponse::failure(err.message)));
        }
    };
    match checkin::check_in(&state.pool, caller, &req, Local::now()).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome.into())),
        Err(e) => {
            let err = AppError::from(e);
            tracing::info!(
                zone_id = req.zone_id,
                attendee_code = %req.attendee_code,
                code = %err.code,
                reason = %err.message,
                "Check-in rejected"
            );
            (err.http_status(), Json(ZoneCheckInResponse::failure(err.message)))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckinsQuery {
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

pub async fn list_checkins(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
    Query(query): Query<CheckinsQuery>,
) -> ApiResult<Vec<ZoneCheckin>> {
    let day = query.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(checkin::list_checkins(&state.pool, zone_id, day).await?))
}

pub async fn zone_history(
    State(state): State<AppState>,
    Path(attendee_id): Path<i64>,
) -> ApiResult<Vec<MovementHistoryEntry>> {
    Ok(Json(checkin::history(&state.pool, attendee_id).await?))
}
