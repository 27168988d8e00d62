use rust_enumeration::ingestion::json::{ingest_json_from_path, ingest_json_from_str};
use rust_enumeration::types::{Account, AccountKind};

#[test]
fn ingest_json_array_from_path_happy_path() {
    let accounts = ingest_json_from_path("tests/fixtures/accounts.json").unwrap();

    assert_eq!(accounts.len(), 4);
    assert_eq!(accounts[0].name, "Jay");
    assert_eq!(accounts[3], Account::new("Rick", 10.0, AccountKind::Business));
}

#[test]
fn ingest_json_ndjson_happy_path() {
    let input = r#"
{"name":"Ada","value":98.5,"type":"personal"}
{"name":"Grace","value":87.25,"type":"business"}
"#;
    let accounts = ingest_json_from_str(input).unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1], Account::new("Grace", 87.25, AccountKind::Business));
}

#[test]
fn ingest_json_errors_on_missing_field() {
    let input = r#"[{"name":"Ada","value":98.5}]"#;
    let msg = ingest_json_from_str(input).unwrap_err().to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("row 1 missing required field 'type'"));
}

#[test]
fn ingest_json_errors_on_type_mismatch() {
    let input = r#"[{"name":"Ada","value":"lots","type":"personal"}]"#;
    let msg = ingest_json_from_str(input).unwrap_err().to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'value'"));
}

#[test]
fn ingest_json_errors_on_non_object_row() {
    let msg = ingest_json_from_str(r#"[{"name":"Ada","value":1,"type":"personal"}, 3]"#)
        .unwrap_err()
        .to_string();
    assert!(msg.contains("row 2 is not a json object"));
}
