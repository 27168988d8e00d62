//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Account, AccountKind};

/// Columns an account CSV must provide, in the order of [`Account`]'s fields.
pub const ACCOUNT_COLUMNS: [&str; 3] = ["name", "value", "type"];

/// Ingest a CSV file of accounts.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `name`, `value` and `type` (order can differ, extra columns are ignored).
/// - `value` must parse as a finite number (`NaN`/`inf` are rejected) and `type` must be `personal` or `business`.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Account>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest accounts from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<Account>> {
    let headers = rdr.headers()?.clone();

    let mut col_idxs = [0usize; ACCOUNT_COLUMNS.len()];
    for (slot, column) in col_idxs.iter_mut().zip(ACCOUNT_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{column}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;
    }
    let [name_idx, value_idx, kind_idx] = col_idxs;

    let mut accounts = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            return Err(IngestionError::ParseError {
                row: user_row,
                column: "name".to_string(),
                raw: String::new(),
                message: "account name is empty".to_string(),
            });
        }
        let value = parse_value(user_row, record.get(value_idx).unwrap_or(""))?;
        let kind = parse_kind(user_row, record.get(kind_idx).unwrap_or(""))?;
        accounts.push(Account::new(name, value, kind));
    }

    Ok(accounts)
}

fn parse_value(row: usize, raw: &str) -> IngestionResult<f64> {
    let bad = |message: String| IngestionError::ParseError {
        row,
        column: "value".to_string(),
        raw: raw.to_owned(),
        message,
    };
    let value = raw.trim().parse::<f64>().map_err(|e| bad(e.to_string()))?;
    if !value.is_finite() {
        return Err(bad("value must be a finite number".to_string()));
    }
    Ok(value)
}

fn parse_kind(row: usize, raw: &str) -> IngestionResult<AccountKind> {
    AccountKind::from_name(raw).ok_or_else(|| IngestionError::ParseError {
        row,
        column: "type".to_string(),
        raw: raw.to_owned(),
        message: "expected account type (personal/business)".to_string(),
    })
}
