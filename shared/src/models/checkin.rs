//! Zone Check-in Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Attendee, EventZone};

/// Ledger row: one passage of an attendee through a zone on an event day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ZoneCheckin {
    pub id: i64,
    pub attendee_id: i64,
    pub zone_id: i64,
    pub checked_in_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_in_by: Option<i64>,
    pub event_day: NaiveDate,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub metadata: serde_json::Value,
}

/// Check-in request from a staff scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCheckInRequest {
    pub attendee_code: String,
    pub zone_id: i64,
    /// Defaults to the server's local date
    pub event_day: Option<NaiveDate>,
}

/// Check-in outcome as shown on the scanner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneCheckInResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee: Option<Attendee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<EventZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<i64>,
    pub packet_delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ZoneCheckInResponse {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            ..Default::default()
        }
    }
}

/// Movement history entry: a check-in with its zone's labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementHistoryEntry {
    pub checkin: ZoneCheckin,
    pub zone_name: String,
    pub zone_type: String,
}
