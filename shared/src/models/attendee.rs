//! Attendee Model (owned by attendee administration, read here)

use serde::{Deserialize, Serialize};

/// Key in `custom_fields` consulted by category access rules
pub const CATEGORY_FIELD: &str = "category";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    /// Badge code scanned at the checkpoint, unique per event
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    /// Set once, by the first registration-zone check-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_zone_id: Option<i64>,
    pub packet_delivered: bool,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub custom_fields: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Attendee {
    pub fn is_registered(&self) -> bool {
        self.registered_at.is_some()
    }

    /// Non-empty string value of `custom_fields.category`
    pub fn category(&self) -> Option<&str> {
        self.custom_fields
            .get(CATEGORY_FIELD)
            .and_then(|v| v.as_str())
            .filter(|c| !c.is_empty())
    }
}
