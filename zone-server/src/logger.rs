//! Logging Infrastructure
//!
//! - Console output: pretty in development, JSON in production
//! - Optional `LOG_DIR` with daily rotating files:
//!   - `app/`: everything except audit and security targets (14-day retention)
//!   - `audit/`: check-in decisions (`target: "audit"`), kept permanently
//!   - `security/`: rejected credentials (`target: "security"`), kept permanently

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveTime};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

const APP_LOG_RETENTION_DAYS: i64 = 14;
const AUDIT_TARGET: &str = "audit";
const SECURITY_TARGET: &str = "security";

/// Initialize tracing for the server process.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = vec![console_layer(json_format)];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        layers.push(file_layer(log_dir, "app", json_format, |target| {
            target != AUDIT_TARGET && target != SECURITY_TARGET
        })?);
        layers.push(file_layer(log_dir, AUDIT_TARGET, json_format, |target| {
            target == AUDIT_TARGET
        })?);
        layers.push(file_layer(log_dir, SECURITY_TARGET, json_format, |target| {
            target == SECURITY_TARGET
        })?);

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}

fn console_layer(json_format: bool) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    }
}

/// Daily rotating file under `<log_dir>/<name>/<name>.YYYY-MM-DD`
fn file_layer(
    log_dir: &Path,
    name: &str,
    json_format: bool,
    keep: fn(&str) -> bool,
) -> anyhow::Result<BoxedLayer> {
    let dir = log_dir.join(name);
    fs::create_dir_all(&dir)?;
    let writer = std::sync::Mutex::new(RollingFileAppender::new(Rotation::DAILY, dir, name));
    let filter = tracing_subscriber::filter::filter_fn(move |meta| keep(meta.target()));

    let layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    };
    Ok(layer)
}

/// Delete `app/` log files older than the retention window.
///
/// Audit and security logs are never touched.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    let cutoff = Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(date) = log_file_date(name) else {
            continue;
        };
        let Some(written) = date.and_time(NaiveTime::MIN).and_local_timezone(Local).single() else {
            continue;
        };
        if written < cutoff {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Date suffix of a rolled file name such as `app.2026-03-14`
fn log_file_date(name: &str) -> Option<chrono::NaiveDate> {
    let date_part = name.strip_prefix("app.")?;
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

/// Audit log helper - records check-in decisions
///
/// # Examples
/// ```ignore
/// audit_log!(caller.user_id, "zone_checkin", zone.id, "Check-in successful");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            details = $details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

/// Security log helper - records rejected credentials
#[macro_export]
macro_rules! security_log {
    ($event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            $($arg)*
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rolled_app_file_names() {
        assert_eq!(
            log_file_date("app.2026-03-14"),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 14)
        );
        assert_eq!(log_file_date("audit.2026-03-14"), None);
        assert_eq!(log_file_date("app.latest"), None);
    }

    #[test]
    fn cleanup_removes_only_expired_app_logs() {
        let tmp = tempfile::tempdir().unwrap();
        let app_dir = tmp.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let old = (Local::now() - chrono::Duration::days(30)).date_naive();
        let fresh = Local::now().date_naive();
        let old_file = app_dir.join(format!("app.{}", old.format("%Y-%m-%d")));
        let fresh_file = app_dir.join(format!("app.{}", fresh.format("%Y-%m-%d")));
        fs::write(&old_file, "old").unwrap();
        fs::write(&fresh_file, "fresh").unwrap();

        cleanup_old_logs(tmp.path()).unwrap();

        assert!(!old_file.exists());
        assert!(fresh_file.exists());
    }
}
