//! Zone check-in orchestration
//!
//! One check-in runs, in order:
//! 1. Zone lookup, activity gate and time-window gate
//! 2. Attendee lookup by badge code within the zone's event
//! 3. Registration prerequisite (read-only)
//! 4. Access resolution
//! 5. One transaction: registration (registration zones) + ledger insert-or-get
//! 6. Fire-and-forget usage logging for novel rows

use chrono::{DateTime, Local, NaiveDate};
use serde_json::json;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Attendee, EventZone, MovementHistoryEntry, ZoneCheckInRequest, ZoneCheckInResponse,
    ZoneCheckin,
};
use sqlx::SqlitePool;

use super::registration::RegistrationPlan;
use super::registry;
use super::resolver::{self, AccessContext};
use crate::auth::Caller;
use crate::db;
use crate::db::checkins::NewCheckin;
use crate::error::ServiceResult;

pub const MSG_CHECKED_IN: &str = "Check-in successful";
pub const MSG_ALREADY_CHECKED_IN: &str = "Already checked in";

#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    /// `false` when the ledger already held this (attendee, zone, day)
    pub created: bool,
    pub attendee: Attendee,
    pub zone: EventZone,
    pub checkin: ZoneCheckin,
    pub message: &'static str,
}

impl From<CheckInOutcome> for ZoneCheckInResponse {
    fn from(o: CheckInOutcome) -> Self {
        Self {
            success: true,
            packet_delivered: o.attendee.packet_delivered,
            checked_in_at: Some(o.checkin.checked_in_at),
            attendee: Some(o.attendee),
            zone: Some(o.zone),
            message: Some(o.message.to_string()),
            error: None,
        }
    }
}

/// Check an attendee into a zone at `now` (server-local time).
///
/// `event_day` defaults to the local date of `now`.
pub async fn check_in(
    pool: &SqlitePool,
    caller: Caller,
    req: &ZoneCheckInRequest,
    now: DateTime<Local>,
) -> ServiceResult<CheckInOutcome> {
    let zone = registry::get_zone(pool, req.zone_id).await?;
    registry::ensure_operational(&zone, now.time())?;

    let attendee = db::attendees::find_by_code(pool, zone.event_id, &req.attendee_code)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AttendeeNotFound))?;

    let plan = RegistrationPlan::for_zone(&zone);
    plan.check(&attendee)?;

    let override_row = db::access::find_override(pool, attendee.id, zone.id).await?;
    let rules = db::access::list_rules(pool, zone.id).await?;
    let decision = resolver::resolve(&AccessContext {
        attendee: &attendee,
        override_row: override_row.as_ref(),
        rules: &rules,
    });
    if !decision.allowed {
        crate::audit_log!(
            caller.user_id,
            "zone_checkin_denied",
            zone.id,
            decision.reason.as_str()
        );
    }
    let decision = decision.into_result()?;

    let event_day = req.event_day.unwrap_or_else(|| now.date_naive());
    let now_ms = now.timestamp_millis();
    let new = NewCheckin {
        attendee_id: attendee.id,
        zone_id: zone.id,
        event_day,
        checked_in_at: now_ms,
        checked_in_by: Some(caller.user_id),
        metadata: json!({ "access_stage": decision.stage, "access_reason": decision.reason }),
    };

    let mut tx = pool.begin().await?;
    let registered_now = match plan {
        RegistrationPlan::Register => {
            db::attendees::mark_registered(&mut *tx, attendee.id, zone.id, now_ms).await?
        }
        _ => false,
    };
    let (checkin, created) = db::checkins::insert_or_get(&mut *tx, &new).await?;
    tx.commit().await?;

    if registered_now {
        tracing::info!(attendee_id = attendee.id, zone_id = zone.id, "Attendee registered");
    }
    // A concurrent check-in may have registered the attendee after our read.
    let attendee = if plan == RegistrationPlan::Register && !attendee.is_registered() {
        db::attendees::find_by_id(pool, attendee.id)
            .await?
            .unwrap_or(attendee)
    } else {
        attendee
    };

    let message = if created {
        spawn_usage_log(pool.clone(), zone.event_id, checkin.id);
        MSG_CHECKED_IN
    } else {
        MSG_ALREADY_CHECKED_IN
    };
    crate::audit_log!(caller.user_id, "zone_checkin", zone.id, message);

    Ok(CheckInOutcome {
        created,
        attendee,
        zone,
        checkin,
        message,
    })
}

/// Record the billable usage of a novel check-in without holding up the response
fn spawn_usage_log(pool: SqlitePool, event_id: i64, checkin_id: i64) {
    tokio::spawn(async move {
        if let Err(e) = record_usage(&pool, event_id, checkin_id).await {
            tracing::warn!(event_id, checkin_id, error = %e, "Failed to record check-in usage");
        }
    });
}

async fn record_usage(pool: &SqlitePool, event_id: i64, checkin_id: i64) -> Result<(), sqlx::Error> {
    let Some(event) = db::events::find_by_id(pool, event_id).await? else {
        tracing::warn!(event_id, "Usage not recorded: event missing");
        return Ok(());
    };
    db::usage::insert(
        pool,
        event.tenant_id,
        db::usage::RESOURCE_ZONE_CHECKIN,
        Some(checkin_id),
        db::usage::ACTION_CREATED,
        1,
    )
    .await
}

/// Check-ins of a zone on `day`, newest first
pub async fn list_checkins(
    pool: &SqlitePool,
    zone_id: i64,
    day: NaiveDate,
) -> ServiceResult<Vec<ZoneCheckin>> {
    registry::get_zone(pool, zone_id).await?;
    Ok(db::checkins::list_by_zone_day(pool, zone_id, day).await?)
}

pub async fn history(pool: &SqlitePool, attendee_id: i64) -> ServiceResult<Vec<MovementHistoryEntry>> {
    if db::attendees::find_by_id(pool, attendee_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::AttendeeNotFound).into());
    }
    Ok(db::checkins::history(pool, attendee_id).await?)
}
