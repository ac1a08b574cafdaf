//! Event zone queries

use chrono::NaiveDate;
use shared::models::{EventZone, EventZoneInput};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, event_id, name, zone_type, order_index, open_time, close_time, \
    is_registration_zone, requires_registration, is_active, settings, created_at, updated_at";

/// Per-zone counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct ZoneCounts {
    pub total_checkins: i64,
    pub today_checkins: i64,
    pub assigned_staff: i64,
    pub access_rules_count: i64,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<EventZone>, sqlx::Error> {
    sqlx::query_as::<_, EventZone>(&format!("SELECT {COLUMNS} FROM event_zone WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Zones of an event in display order
pub async fn list_by_event(pool: &SqlitePool, event_id: i64) -> Result<Vec<EventZone>, sqlx::Error> {
    sqlx::query_as::<_, EventZone>(&format!(
        "SELECT {COLUMNS} FROM event_zone WHERE event_id = ? ORDER BY order_index ASC, id ASC"
    ))
    .bind(event_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &SqlitePool,
    event_id: i64,
    input: &EventZoneInput,
) -> Result<EventZone, sqlx::Error> {
    let now = now_millis();
    let settings = input
        .settings
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));

    sqlx::query_as::<_, EventZone>(&format!(
        "INSERT INTO event_zone ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {COLUMNS}"
    ))
    .bind(snowflake_id())
    .bind(event_id)
    .bind(&input.name)
    .bind(&input.zone_type)
    .bind(input.order_index)
    .bind(&input.open_time)
    .bind(&input.close_time)
    .bind(input.is_registration_zone)
    .bind(input.requires_registration)
    .bind(input.is_active)
    .bind(sqlx::types::Json(settings))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Replace every mutable field; `None` when the zone does not exist
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &EventZoneInput,
) -> Result<Option<EventZone>, sqlx::Error> {
    let settings = input
        .settings
        .clone()
        .unwrap_or_else(|| serde_json::json!({}));

    sqlx::query_as::<_, EventZone>(&format!(
        "UPDATE event_zone SET name = ?, zone_type = ?, order_index = ?, open_time = ?, \
         close_time = ?, is_registration_zone = ?, requires_registration = ?, is_active = ?, \
         settings = ?, updated_at = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(&input.name)
    .bind(&input.zone_type)
    .bind(input.order_index)
    .bind(&input.open_time)
    .bind(&input.close_time)
    .bind(input.is_registration_zone)
    .bind(input.requires_registration)
    .bind(input.is_active)
    .bind(sqlx::types::Json(settings))
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard delete; rules, overrides, check-ins and assignments cascade
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM event_zone WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn counts(
    pool: &SqlitePool,
    zone_id: i64,
    today: NaiveDate,
) -> Result<ZoneCounts, sqlx::Error> {
    sqlx::query_as::<_, ZoneCounts>(
        "SELECT \
           (SELECT COUNT(*) FROM zone_checkin WHERE zone_id = ?1) AS total_checkins, \
           (SELECT COUNT(*) FROM zone_checkin WHERE zone_id = ?1 AND event_day = ?2) AS today_checkins, \
           (SELECT COUNT(*) FROM staff_zone_assignment WHERE zone_id = ?1) AS assigned_staff, \
           (SELECT COUNT(*) FROM zone_access_rule WHERE zone_id = ?1) AS access_rules_count",
    )
    .bind(zone_id)
    .bind(today)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::*;

    #[tokio::test]
    async fn test_insert_defaults_and_order() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;

        let mut hall = zone_input("Main Hall");
        hall.order_index = 2;
        let mut desk = zone_input("Registration");
        desk.order_index = 1;
        desk.is_registration_zone = true;

        let hall = insert(&pool, event.id, &hall).await.unwrap();
        let desk = insert(&pool, event.id, &desk).await.unwrap();
        assert_eq!(hall.zone_type, "general");
        assert!(hall.is_active);
        assert_eq!(hall.settings, serde_json::json!({}));

        let zones = list_by_event(&pool, event.id).await.unwrap();
        let names: Vec<_> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["Registration", "Main Hall"]);
        assert_eq!(zones[0], desk);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let mut input = zone_input("Main Hall");
        input.open_time = Some("09:00".into());
        let zone = insert(&pool, event.id, &input).await.unwrap();

        let mut replacement = zone_input("Main Hall B");
        replacement.is_active = false;
        let updated = update(&pool, zone.id, &replacement).await.unwrap().unwrap();
        assert_eq!(updated.name, "Main Hall B");
        assert_eq!(updated.open_time, None);
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, zone.created_at);

        assert!(update(&pool, 42, &replacement).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_and_counts() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;
        let zone = insert(&pool, event.id, &zone_input("VIP")).await.unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 9, 8).unwrap();
        assert_eq!(counts(&pool, zone.id, today).await.unwrap(), ZoneCounts::default());

        assert!(delete(&pool, zone.id).await.unwrap());
        assert!(!delete(&pool, zone.id).await.unwrap());
        assert!(find_by_id(&pool, zone.id).await.unwrap().is_none());
    }
}
