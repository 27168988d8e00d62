use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::IngestionError;

use super::unified::IngestionFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

impl IngestionSeverity {
    /// Classify an ingestion error.
    ///
    /// I/O failures, including I/O raised from inside the CSV reader, are `Critical`. Everything
    /// else means the input itself was bad and is an `Error`.
    pub fn for_error(error: &IngestionError) -> Self {
        match error {
            IngestionError::Io(_) => Self::Critical,
            IngestionError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            IngestionError::Json(err) if err.is_io() => Self::Critical,
            IngestionError::Json(_)
            | IngestionError::Pattern(_)
            | IngestionError::SchemaMismatch { .. }
            | IngestionError::NonFiniteValue { .. }
            | IngestionError::ParseError { .. } => Self::Error,
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
    /// Format used for ingestion.
    pub format: IngestionFormat,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of ingested accounts.
    pub rows: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans callbacks out to several observers, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!("{}", describe_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!("{}", describe_failure("fail", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!("{}", describe_failure("ALERT", ctx, severity, error));
    }
}

/// Appends ingestion events to a local log file, one line per event.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {line}", unix_ts());
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append_line(&describe_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append_line(&describe_failure("fail", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append_line(&describe_failure("ALERT", ctx, severity, error));
    }
}

fn describe_success(ctx: &IngestionContext, stats: IngestionStats) -> String {
    format!(
        "[ingest][ok] format={:?} path={} rows={}",
        ctx.format,
        ctx.path.display(),
        stats.rows
    )
}

fn describe_failure(
    tag: &str,
    ctx: &IngestionContext,
    severity: IngestionSeverity,
    error: &IngestionError,
) -> String {
    format!(
        "[ingest][{tag}] severity={:?} format={:?} path={} err={}",
        severity,
        ctx.format,
        ctx.path.display(),
        error
    )
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{
        CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity,
        IngestionStats,
    };
    use crate::error::IngestionError;
    use crate::ingestion::IngestionFormat;

    fn ctx() -> IngestionContext {
        IngestionContext {
            path: "accounts.csv".into(),
            format: IngestionFormat::Csv,
        }
    }

    #[derive(Default)]
    struct Counting {
        successes: Mutex<usize>,
        failures: Mutex<usize>,
    }

    impl IngestionObserver for Counting {
        fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {
            *self.successes.lock().unwrap() += 1;
        }

        fn on_failure(&self, _ctx: &IngestionContext, _sev: IngestionSeverity, _err: &IngestionError) {
            *self.failures.lock().unwrap() += 1;
        }
    }

    #[test]
    fn severity_classification() {
        let io = IngestionError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(IngestionSeverity::for_error(&io), IngestionSeverity::Critical);

        let bad = IngestionError::SchemaMismatch {
            message: "x".to_string(),
        };
        assert_eq!(IngestionSeverity::for_error(&bad), IngestionSeverity::Error);

        let json = IngestionError::Json(serde_json::from_str::<u8>("nope").unwrap_err());
        assert_eq!(IngestionSeverity::for_error(&json), IngestionSeverity::Error);
    }

    #[test]
    fn composite_fans_out_and_default_alert_forwards_to_failure() {
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());
        let composite = CompositeObserver::new(vec![a.clone(), b.clone()]);
        let err = IngestionError::SchemaMismatch {
            message: "x".to_string(),
        };

        composite.on_success(&ctx(), IngestionStats { rows: 3 });
        composite.on_alert(&ctx(), IngestionSeverity::Critical, &err);

        for o in [&a, &b] {
            assert_eq!(*o.successes.lock().unwrap(), 1);
            assert_eq!(*o.failures.lock().unwrap(), 1);
        }
    }

    #[test]
    fn file_observer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("ingest.log");
        let obs = FileObserver::new(&log);

        obs.on_success(&ctx(), IngestionStats { rows: 2 });
        obs.on_failure(
            &ctx(),
            IngestionSeverity::Error,
            &IngestionError::SchemaMismatch {
                message: "missing column".to_string(),
            },
        );

        let text = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[ingest][ok]"));
        assert!(lines[0].contains("rows=2"));
        assert!(lines[1].contains("[ingest][fail] severity=Error"));
        assert!(lines[1].contains("missing column"));
    }
}
