//! Event Zone Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Zone type assigned when a create payload omits one
pub const DEFAULT_ZONE_TYPE: &str = "general";

/// QR payload type for zone selection screens
pub const ZONE_QR_TYPE: &str = "zone_select";

/// Event zone (checkpoint: registration desk, main hall, VIP lounge...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EventZone {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    /// Free-form label: registration, general, vip, workshop
    pub zone_type: String,
    pub order_index: i32,
    /// Opening time of day, `HH:MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    /// Closing time of day, `HH:MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    pub is_registration_zone: bool,
    pub requires_registration: bool,
    pub is_active: bool,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub settings: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create / replace zone payload
///
/// Updates replace every mutable field, so an omitted `open_time` clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventZoneInput {
    pub name: String,
    #[serde(default = "default_zone_type")]
    pub zone_type: String,
    #[serde(default)]
    pub order_index: i32,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    #[serde(default)]
    pub is_registration_zone: bool,
    #[serde(default)]
    pub requires_registration: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

fn default_zone_type() -> String {
    DEFAULT_ZONE_TYPE.to_string()
}

fn default_true() -> bool {
    true
}

/// Zone with operational counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventZoneWithStats {
    pub zone: EventZone,
    pub total_checkins: i64,
    pub today_checkins: i64,
    pub assigned_staff: i64,
    pub access_rules_count: i64,
}

/// JSON encoded into a zone's QR code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneQrData {
    pub zone_id: i64,
    pub event_id: i64,
    pub zone_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ZoneQrData {
    pub fn for_zone(zone: &EventZone) -> Self {
        Self {
            zone_id: zone.id,
            event_id: zone.event_id,
            zone_name: zone.name.clone(),
            kind: ZONE_QR_TYPE.to_string(),
        }
    }
}

/// One selectable day of the owning event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneDay {
    pub date: NaiveDate,
    pub day_number: u32,
    pub is_today: bool,
    pub is_past: bool,
    pub is_future: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults() {
        let input: EventZoneInput = serde_json::from_str(r#"{"name":"Main Hall"}"#).unwrap();
        assert_eq!(input.zone_type, "general");
        assert_eq!(input.order_index, 0);
        assert!(input.is_active);
        assert!(!input.is_registration_zone);
        assert!(input.open_time.is_none());
    }

    #[test]
    fn qr_payload_shape() {
        let qr = ZoneQrData {
            zone_id: 10,
            event_id: 20,
            zone_name: "VIP Lounge".into(),
            kind: ZONE_QR_TYPE.into(),
        };
        let json = serde_json::to_value(&qr).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "zone_id": 10,
                "event_id": 20,
                "zone_name": "VIP Lounge",
                "type": "zone_select"
            })
        );
    }
}
