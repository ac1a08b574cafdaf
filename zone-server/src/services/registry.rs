//! Zone registry
//!
//! Zone lookup, the activity and time-window gates, and zone administration.

use chrono::{NaiveDate, NaiveTime};
use shared::error::{AppError, ErrorCode};
use shared::models::{EventZone, EventZoneInput, EventZoneWithStats, ZoneQrData};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ServiceResult;

/// Zero-padded 24h `HH:MM`
pub fn is_valid_time_of_day(value: &str) -> bool {
    value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

/// Whether `now` lies inside the zone's opening window (bounds inclusive).
///
/// Times compare as `HH:MM` strings. A window whose close precedes its open
/// never admits anyone.
pub fn is_within_window(zone: &EventZone, now: NaiveTime) -> bool {
    let current = now.format("%H:%M").to_string();
    if let Some(open) = &zone.open_time
        && current.as_str() < open.as_str()
    {
        return false;
    }
    if let Some(close) = &zone.close_time
        && current.as_str() > close.as_str()
    {
        return false;
    }
    true
}

/// Activity gate, then time-window gate
pub fn ensure_operational(zone: &EventZone, now: NaiveTime) -> Result<(), AppError> {
    if !zone.is_active {
        return Err(AppError::new(ErrorCode::ZoneInactive));
    }
    if !is_within_window(zone, now) {
        return Err(AppError::new(ErrorCode::ZoneClosed));
    }
    Ok(())
}

pub fn validate_input(input: &EventZoneInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::RequiredField).with_detail("field", "name"));
    }
    for (field, value) in [("open_time", &input.open_time), ("close_time", &input.close_time)] {
        if let Some(value) = value
            && !is_valid_time_of_day(value)
        {
            return Err(AppError::new(ErrorCode::ZoneInvalidTimeWindow)
                .with_detail("field", field)
                .with_detail("value", value.as_str()));
        }
    }
    Ok(())
}

pub async fn get_zone(pool: &SqlitePool, zone_id: i64) -> ServiceResult<EventZone> {
    db::zones::find_by_id(pool, zone_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ZoneNotFound).into())
}

pub async fn create_zone(
    pool: &SqlitePool,
    event_id: i64,
    input: &EventZoneInput,
) -> ServiceResult<EventZone> {
    validate_input(input)?;
    if db::events::find_by_id(pool, event_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::EventNotFound).into());
    }
    let zone = db::zones::insert(pool, event_id, input).await?;
    tracing::info!(zone_id = zone.id, event_id, name = %zone.name, "Zone created");
    Ok(zone)
}

pub async fn list_zones(pool: &SqlitePool, event_id: i64) -> ServiceResult<Vec<EventZone>> {
    Ok(db::zones::list_by_event(pool, event_id).await?)
}

pub async fn list_zones_with_stats(
    pool: &SqlitePool,
    event_id: i64,
    today: NaiveDate,
) -> ServiceResult<Vec<EventZoneWithStats>> {
    let zones = db::zones::list_by_event(pool, event_id).await?;
    let mut out = Vec::with_capacity(zones.len());
    for zone in zones {
        let counts = db::zones::counts(pool, zone.id, today).await?;
        out.push(EventZoneWithStats {
            zone,
            total_checkins: counts.total_checkins,
            today_checkins: counts.today_checkins,
            assigned_staff: counts.assigned_staff,
            access_rules_count: counts.access_rules_count,
        });
    }
    Ok(out)
}

pub async fn update_zone(
    pool: &SqlitePool,
    zone_id: i64,
    input: &EventZoneInput,
) -> ServiceResult<EventZone> {
    validate_input(input)?;
    let zone = db::zones::update(pool, zone_id, input)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ZoneNotFound))?;
    tracing::info!(zone_id, "Zone updated");
    Ok(zone)
}

pub async fn delete_zone(pool: &SqlitePool, zone_id: i64) -> ServiceResult<()> {
    if !db::zones::delete(pool, zone_id).await? {
        return Err(AppError::new(ErrorCode::ZoneNotFound).into());
    }
    tracing::info!(zone_id, "Zone deleted");
    Ok(())
}

pub async fn zone_qr(pool: &SqlitePool, zone_id: i64) -> ServiceResult<ZoneQrData> {
    let zone = get_zone(pool, zone_id).await?;
    Ok(ZoneQrData::for_zone(&zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::*;

    fn at(hh: u32, mm: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hh, mm, 0).unwrap()
    }

    fn zone(open: Option<&str>, close: Option<&str>) -> EventZone {
        EventZone {
            id: 1,
            event_id: 1,
            name: "Main Hall".into(),
            zone_type: "general".into(),
            order_index: 0,
            open_time: open.map(Into::into),
            close_time: close.map(Into::into),
            is_registration_zone: false,
            requires_registration: false,
            is_active: true,
            settings: serde_json::json!({}),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn time_of_day_format() {
        assert!(is_valid_time_of_day("00:00"));
        assert!(is_valid_time_of_day("23:59"));
        assert!(!is_valid_time_of_day("9:00"));
        assert!(!is_valid_time_of_day("24:00"));
        assert!(!is_valid_time_of_day("12:60"));
        assert!(!is_valid_time_of_day("noon"));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let z = zone(Some("09:00"), Some("18:00"));
        assert!(!is_within_window(&z, at(8, 59)));
        assert!(is_within_window(&z, at(9, 0)));
        assert!(is_within_window(&z, at(10, 0)));
        assert!(is_within_window(&z, at(18, 0)));
        // 18:00:30 still formats as 18:00
        assert!(is_within_window(&z, NaiveTime::from_hms_opt(18, 0, 30).unwrap()));
        assert!(!is_within_window(&z, at(18, 1)));
    }

    #[test]
    fn single_bound_and_unbounded_windows() {
        assert!(is_within_window(&zone(None, None), at(3, 0)));
        assert!(!is_within_window(&zone(Some("12:00"), None), at(11, 0)));
        assert!(is_within_window(&zone(Some("12:00"), None), at(23, 59)));
        assert!(is_within_window(&zone(None, Some("12:00")), at(0, 0)));
        assert!(!is_within_window(&zone(None, Some("12:00")), at(12, 1)));
    }

    #[test]
    fn midnight_crossing_window_is_never_open() {
        let z = zone(Some("22:00"), Some("02:00"));
        for t in [at(23, 0), at(1, 0), at(12, 0), at(22, 0), at(2, 0)] {
            assert!(!is_within_window(&z, t), "{t}");
        }
    }

    #[test]
    fn gates_report_reason() {
        let mut z = zone(Some("09:00"), Some("18:00"));
        assert!(ensure_operational(&z, at(10, 0)).is_ok());

        let err = ensure_operational(&z, at(19, 0)).unwrap_err();
        assert_eq!(err.message, "Zone is closed at this time");

        z.is_active = false;
        let err = ensure_operational(&z, at(10, 0)).unwrap_err();
        assert_eq!(err.message, "Zone is not active");
    }

    #[test]
    fn input_validation() {
        let mut input = zone_input("Main Hall");
        assert!(validate_input(&input).is_ok());

        input.open_time = Some("9:00".into());
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZoneInvalidTimeWindow);

        let input = zone_input("  ");
        assert_eq!(validate_input(&input).unwrap_err().code, ErrorCode::RequiredField);
    }

    #[tokio::test]
    async fn test_create_requires_event() {
        let pool = test_pool().await;
        let err: AppError = create_zone(&pool, 404, &zone_input("Main Hall"))
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::EventNotFound);
    }

    #[tokio::test]
    async fn test_zone_admin_flow() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let zone = create_zone(&pool, event.id, &zone_input("Main Hall")).await.unwrap();

        let qr = zone_qr(&pool, zone.id).await.unwrap();
        assert_eq!(qr.zone_name, "Main Hall");
        assert_eq!(qr.kind, "zone_select");

        let today = NaiveDate::from_ymd_opt(2026, 9, 8).unwrap();
        let stats = list_zones_with_stats(&pool, event.id, today).await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_checkins, 0);

        delete_zone(&pool, zone.id).await.unwrap();
        let err: AppError = get_zone(&pool, zone.id).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
        let err: AppError = delete_zone(&pool, zone.id).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
    }
}
