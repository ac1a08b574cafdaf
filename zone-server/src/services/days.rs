//! Calendar days of the event owning a zone

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{Event, ZoneDay};
use sqlx::SqlitePool;

use super::registry;
use crate::db;
use crate::error::ServiceResult;

/// `start..=end` of the event, numbered from 1. Empty when a bound is missing.
pub fn event_days(event: &Event, today: NaiveDate) -> Vec<ZoneDay> {
    let (Some(start), Some(end)) = (event.start_date, event.end_date) else {
        return Vec::new();
    };
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .zip(1u32..)
        .map(|(date, day_number)| ZoneDay {
            date,
            day_number,
            is_today: date == today,
            is_past: date < today,
            is_future: date > today,
        })
        .collect()
}

pub async fn zone_days(pool: &SqlitePool, zone_id: i64, today: NaiveDate) -> ServiceResult<Vec<ZoneDay>> {
    let zone = registry::get_zone(pool, zone_id).await?;
    let event = db::events::find_by_id(pool, zone.event_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))?;
    Ok(event_days(&event, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn event(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Event {
        Event {
            id: 1,
            tenant_id: 1,
            name: "RustConf".into(),
            start_date: start,
            end_date: end,
            created_at: 0,
        }
    }

    #[test]
    fn days_are_numbered_and_flagged() {
        let days = event_days(&event(Some(date(8)), Some(date(10))), date(9));
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].day_number, 1);
        assert!(days[0].is_past && !days[0].is_today);
        assert!(days[1].is_today && !days[1].is_past && !days[1].is_future);
        assert_eq!((days[2].date, days[2].day_number), (date(10), 3));
        assert!(days[2].is_future);
    }

    #[test]
    fn missing_or_inverted_bounds() {
        assert!(event_days(&event(None, Some(date(10))), date(9)).is_empty());
        assert!(event_days(&event(Some(date(8)), None), date(9)).is_empty());
        assert!(event_days(&event(Some(date(10)), Some(date(8))), date(9)).is_empty());
        assert_eq!(event_days(&event(Some(date(8)), Some(date(8))), date(9)).len(), 1);
    }

    #[tokio::test]
    async fn test_zone_days_follow_owning_event() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let zone = seed_zone(&pool, event.id, zone_input("Main Hall")).await;

        let days = zone_days(&pool, zone.id, date(8)).await.unwrap();
        assert_eq!(days.len(), 3);
        assert!(days[0].is_today);

        let err: AppError = zone_days(&pool, 404, date(8)).await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
    }
}
