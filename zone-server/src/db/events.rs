//! Event lookups (events are administered elsewhere)

use shared::models::Event;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT id, tenant_id, name, start_date, end_date, created_at FROM event WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert an event row (used by provisioning and fixtures)
pub async fn insert(pool: &SqlitePool, event: &Event) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO event (id, tenant_id, name, start_date, end_date, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(event.id)
    .bind(event.tenant_id)
    .bind(&event.name)
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(event.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::*;

    #[tokio::test]
    async fn test_find_event() {
        let pool = test_pool().await;
        let event = seed_event(&pool).await;

        let found = find_by_id(&pool, event.id).await.unwrap().unwrap();
        assert_eq!(found, event);
        assert!(find_by_id(&pool, 1).await.unwrap().is_none());
    }
}
