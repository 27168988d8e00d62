//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of account objects: `[{"name":"Jay","value":1,"type":"personal"}, ...]`
//! - A single account object
//! - Newline-delimited JSON (NDJSON), one account object per line

use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Account, AccountKind};

/// Ingest a JSON or NDJSON file of accounts.
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Account>> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest accounts from an in-memory JSON string.
pub fn ingest_json_from_str(input: &str) -> IngestionResult<Vec<Account>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // A single document first (array or object), NDJSON otherwise.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => accounts_from_values(&items),
            serde_json::Value::Object(_) => accounts_from_values(std::slice::from_ref(&v)),
            _ => Err(IngestionError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                IngestionError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        accounts_from_values(&values)
    }
}

fn accounts_from_values(values: &[serde_json::Value]) -> IngestionResult<Vec<Account>> {
    let mut accounts = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!("row {row} is not a json object"),
        })?;

        let field = |name: &str| {
            obj.get(name).ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("row {row} missing required field '{name}'"),
            })
        };
        let name = field("name")?;
        let value = field("value")?;
        let kind = field("type")?;

        let name = name.as_str().ok_or_else(|| parse_error(row, "name", name, "expected string"))?;
        let value = value.as_f64().ok_or_else(|| parse_error(row, "value", value, "expected number"))?;
        let kind = kind
            .as_str()
            .and_then(AccountKind::from_name)
            .ok_or_else(|| parse_error(row, "type", kind, "expected account type (personal/business)"))?;

        accounts.push(Account::new(name, value, kind));
    }

    Ok(accounts)
}

fn parse_error(row: usize, column: &str, raw: &serde_json::Value, message: &str) -> IngestionError {
    IngestionError::ParseError {
        row,
        column: column.to_string(),
        raw: raw.to_string(),
        message: message.to_string(),
    }
}
