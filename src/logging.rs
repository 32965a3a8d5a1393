use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};
use tracing::Span;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "order-form.log";

/// Date part of a rotated file name, daily (`order-form.log.2026-10-18`) or hourly
/// (`order-form.log.2026-10-18-09`).
const LOG_FILE_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Holds the file writer open and the span that scopes one run of the form.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    run_span: Span,
}

impl LoggingGuard {
    /// Every session event is recorded under this span, so file lines carry the run id.
    pub fn run_span(&self) -> Span {
        self.run_span.clone()
    }
}

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = build_env_filter(&logging_config.filter)?;
    let log_dir = &logging_config.dir;
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;

    let purged = purge_expired_logs(
        log_dir,
        logging_config.retention_days,
        OffsetDateTime::now_utc().date(),
    );
    let appender = RollingFileAppender::builder()
        .rotation(match logging_config.rotation {
            LoggingRotation::Daily => Rotation::DAILY,
            LoggingRotation::Hourly => Rotation::HOURLY,
        })
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .with_context(|| format!("failed to open log file in {}", log_dir.display()))?;
    let (writer, worker_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(false)
        .with_span_list(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);
    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_span = tracing::info_span!(
        target: "order_form",
        "order_form_run",
        run_id = %Uuid::now_v7(),
    );
    run_span.in_scope(|| match purged {
        Ok(removed) => tracing::info!(
            target: "logging",
            dir = %log_dir.display(),
            rotation = ?logging_config.rotation,
            retention_days = logging_config.retention_days,
            expired_removed = removed.len(),
            "logging_initialized"
        ),
        Err(err) => tracing::warn!(
            target: "logging",
            dir = %log_dir.display(),
            error = %format!("{err:#}"),
            "log_retention_failed"
        ),
    });

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        run_span,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).with_context(|| format!("invalid logging.filter '{filter}'"))
}

/// Removes rotated files dated more than `retention_days` before `today`.
/// Files that don't carry a rotation date are never touched.
fn purge_expired_logs(dir: &Path, retention_days: usize, today: Date) -> Result<Vec<PathBuf>> {
    let days = i64::try_from(retention_days).unwrap_or(i64::MAX);
    let cutoff = today
        .checked_sub(Duration::days(days))
        .unwrap_or(Date::MIN);

    let mut removed = Vec::new();
    let entries = fs::read_dir(dir).with_context(|| format!("failed to scan {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to scan {}", dir.display()))?
            .path();
        let Some(dated) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(rotation_date)
        else {
            continue;
        };

        if dated < cutoff {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove expired log {}", path.display()))?;
            removed.push(path);
        }
    }

    Ok(removed)
}

fn rotation_date(file_name: &str) -> Option<Date> {
    let suffix = file_name.strip_prefix(LOG_FILE_PREFIX)?.strip_prefix('.')?;
    let day = suffix.get(..10)?;
    let rest = &suffix[10..];
    if !(rest.is_empty() || rest.starts_with('-')) {
        return None;
    }
    Date::parse(day, LOG_FILE_DATE).ok()
}
