//! Loading account lists from files.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - reads the file into a `Vec<crate::types::Account>`
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`json`], and [`export`]
//! writes account lists back out.

pub mod csv;
pub mod export;
pub mod json;
pub mod observability;
pub mod unified;

pub use export::{accounts_to_json, write_accounts_csv};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
pub use unified::{ingest_from_glob, ingest_from_path, IngestionFormat, IngestionOptions, IngestionRequest};
