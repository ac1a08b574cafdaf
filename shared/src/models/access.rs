//! Zone Access Models

use serde::{Deserialize, Serialize};

/// Category-level rule: attendees whose `category` matches are allowed or denied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ZoneAccessRule {
    pub id: i64,
    pub zone_id: i64,
    pub category: String,
    pub allowed: bool,
    pub created_at: i64,
}

/// Create / bulk-replace rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAccessRuleInput {
    pub category: String,
    pub allowed: bool,
}

/// Individual override for one attendee in one zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendeeZoneAccess {
    pub id: i64,
    pub attendee_id: i64,
    pub zone_id: i64,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create override payload (upserts on attendee + zone)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeZoneAccessCreate {
    pub zone_id: i64,
    pub allowed: bool,
    pub notes: Option<String>,
}

/// Update override payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeZoneAccessUpdate {
    pub allowed: bool,
    pub notes: Option<String>,
}
