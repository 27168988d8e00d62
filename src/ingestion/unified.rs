//! Unified ingestion entrypoints.
//!
//! Most callers should use [`ingest_from_path`], which loads a file into a `Vec<Account>`.
//!
//! - If [`IngestionOptions::format`] is `None`, the ingestion format is inferred from the file
//!   extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.
//!
//! [`ingest_from_glob`] does the same for every file matching a pattern.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Account;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the account count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use rust_enumeration::bank::Bank;
/// use rust_enumeration::ingestion::{ingest_from_path, IngestionOptions};
///
/// # fn main() -> Result<(), rust_enumeration::IngestionError> {
/// // Uses `.csv` to select CSV ingestion.
/// let accounts = ingest_from_path("accounts.csv", &IngestionOptions::default())?;
/// let bank = Bank::from_accounts(accounts);
/// println!("total={}", bank.total_value());
/// # Ok(())
/// # }
/// ```
///
/// ## Force a format and log to stderr
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rust_enumeration::ingestion::{
///     ingest_from_path, IngestionFormat, IngestionOptions, IngestionSeverity, StdErrObserver,
/// };
///
/// # fn main() -> Result<(), rust_enumeration::IngestionError> {
/// let opts = IngestionOptions {
///     format: Some(IngestionFormat::Json),
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: IngestionSeverity::Critical,
/// };
///
/// let accounts = ingest_from_path("accounts_export", &opts)?;
/// println!("accounts={}", accounts.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> IngestionResult<Vec<Account>> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = match fmt {
        IngestionFormat::Csv => csv::ingest_csv_from_path(path),
        IngestionFormat::Json => json::ingest_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(accounts) => obs.on_success(&ctx, IngestionStats { rows: accounts.len() }),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Ingest every file matching `pattern` and concatenate the accounts.
///
/// Files are visited in sorted path order. Each file goes through [`ingest_from_path`], so the
/// observer sees one event per file. The first failing file aborts the whole call. A pattern that
/// matches nothing yields an empty list.
pub fn ingest_from_glob(pattern: &str, options: &IngestionOptions) -> IngestionResult<Vec<Account>> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| IngestionError::Io(e.into_error()))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut accounts = Vec::new();
    for path in &paths {
        accounts.extend(ingest_from_path(path, options)?);
    }
    Ok(accounts)
}

fn infer_format_from_path(path: &Path) -> IngestionResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| IngestionError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// An owned ingestion request, for callers that queue work.
#[derive(Clone)]
pub struct IngestionRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl fmt::Debug for IngestionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl IngestionRequest {
    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> IngestionResult<Vec<Account>> {
        ingest_from_path(&self.path, &self.options)
    }
}
