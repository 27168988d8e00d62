//! Writing account lists back out in the formats ingestion reads.

use std::io::Write;

use crate::error::{IngestionError, IngestionResult};
use crate::processing::find;
use crate::types::Account;

/// Write `accounts` as CSV with a `name,value,type` header.
///
/// Fails with [`IngestionError::NonFiniteValue`] before writing anything if an account holds a
/// `NaN` or infinite value, since ingestion would not read it back.
pub fn write_accounts_csv<W: Write>(writer: W, accounts: &[Account]) -> IngestionResult<()> {
    ensure_finite(accounts)?;
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for account in accounts {
        wtr.serialize(account)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `accounts` as a JSON array.
///
/// JSON has no `NaN`/infinity, so non-finite values are rejected rather than written as `null`.
pub fn accounts_to_json(accounts: &[Account]) -> IngestionResult<String> {
    ensure_finite(accounts)?;
    Ok(serde_json::to_string_pretty(accounts)?)
}

fn ensure_finite(accounts: &[Account]) -> IngestionResult<()> {
    match find(accounts, |a| !a.value.is_finite()) {
        Some(a) => Err(IngestionError::NonFiniteValue {
            name: a.name.clone(),
            value: a.value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{accounts_to_json, write_accounts_csv};
    use crate::error::IngestionError;
    use crate::types::{Account, AccountKind};

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("Jay", 50.0, AccountKind::Personal),
            Account::new("Val", 150.5, AccountKind::Business),
        ]
    }

    #[test]
    fn csv_output_has_header_and_lowercase_kind() {
        let mut buf = Vec::new();
        write_accounts_csv(&mut buf, &accounts()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "name,value,type\nJay,50.0,personal\nVal,150.5,business\n");
    }

    #[test]
    fn json_output_uses_type_key() {
        let text = accounts_to_json(&accounts()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[1]["type"], "business");
        assert_eq!(parsed[0]["name"], "Jay");
    }

    #[test]
    fn non_finite_values_are_refused_by_both_writers() {
        let mut accounts = accounts();
        accounts.push(Account::new("Keith", f64::NAN, AccountKind::Personal));

        let err = accounts_to_json(&accounts).unwrap_err();
        assert!(matches!(err, IngestionError::NonFiniteValue { ref name, .. } if name == "Keith"));

        let mut buf = Vec::new();
        let err = write_accounts_csv(&mut buf, &accounts).unwrap_err();
        assert!(matches!(err, IngestionError::NonFiniteValue { .. }));
        assert!(buf.is_empty());
    }
}
