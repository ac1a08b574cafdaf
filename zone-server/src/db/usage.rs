//! Usage log sink

use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

pub const RESOURCE_ZONE_CHECKIN: &str = "zone_checkin";
pub const ACTION_CREATED: &str = "created";

pub async fn insert(
    pool: &SqlitePool,
    tenant_id: i64,
    resource_type: &str,
    resource_id: Option<i64>,
    action: &str,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO usage_log (id, tenant_id, resource_type, resource_id, action, quantity, logged_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(tenant_id)
    .bind(resource_type)
    .bind(resource_id)
    .bind(action)
    .bind(quantity)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(())
}
