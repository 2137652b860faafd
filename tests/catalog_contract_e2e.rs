//! Catalog Contract E2E Tests
//!
//! Golden tests for the machine-facing catalog surface:
//!   - code table stability and the documented 9003 collision
//!   - lookup determinism for shared codes
//!   - serialized entry names and category identifiers
//!   - catalog export completeness and schema generation

use apierr::{Catalog, Category, EnglishMessages, ErrorKind};
use schemars::schema_for;
use serde_json::{Value, json};

#[test]
fn e2e_codes_are_unique_except_the_9003_pair() {
    let mut seen = std::collections::HashMap::new();
    let mut duplicates = Vec::new();
    for kind in ErrorKind::all() {
        if seen.insert(kind.code(), *kind).is_some() {
            duplicates.push(*kind);
        }
    }
    assert_eq!(duplicates, vec![ErrorKind::ResultError]);
}

#[test]
fn e2e_lookup_resolves_shared_code_to_first_declared_entry() {
    assert_eq!(ErrorKind::lookup(9003), Some(ErrorKind::SocketException));
    assert_eq!(ErrorKind::lookup(40015), Some(ErrorKind::LoggedOut));
    assert_eq!(ErrorKind::lookup(7777), None);
}

#[test]
fn e2e_serialized_names_match_the_stable_identifiers() {
    for kind in ErrorKind::all() {
        let serialized = serde_json::to_value(kind).unwrap();
        assert_eq!(serialized, json!(kind.name()), "{kind:?}");
    }

    let roundtripped: ErrorKind = serde_json::from_str("\"TOKEN_INVALID\"").unwrap();
    assert_eq!(roundtripped, ErrorKind::TokenInvalid);
}

#[test]
fn e2e_category_identifiers_serialize_lowercase() {
    for category in Category::all() {
        let serialized = serde_json::to_value(category).unwrap();
        assert_eq!(serialized, json!(category.id()), "{category:?}");
    }
}

#[test]
fn e2e_catalog_export_is_complete() {
    let catalog = Catalog::export_with(&EnglishMessages);

    assert_eq!(catalog.errors.len(), ErrorKind::all().len());
    assert_eq!(catalog.categories.len(), Category::all().len());

    for entry in &catalog.errors {
        assert!(!entry.name.is_empty());
        assert!(!entry.message.is_empty(), "{}", entry.name);
    }

    let auth = catalog.categories.iter().find(|c| c.id == "auth").unwrap();
    assert_eq!(auth.code_range, "40000-59999");

    let token = catalog.errors.iter().find(|e| e.name == "TOKEN_INVALID").unwrap();
    assert_eq!(token.code, 40003);
    assert_eq!(token.message, ErrorKind::TokenInvalid.default_message());
}

#[test]
fn e2e_catalog_export_serializes_for_machine_consumption() {
    let catalog = Catalog::export_with(&EnglishMessages);
    let serialized = serde_json::to_string_pretty(&catalog).unwrap();
    let value: Value = serde_json::from_str(&serialized).unwrap();

    assert!(value["categories"].is_array());
    assert!(value["errors"].is_array());
    assert_eq!(value["errors"][0]["name"].as_str().unwrap(), "UNKNOWN_ERROR");
    assert_eq!(value["errors"][0]["code"].as_i64().unwrap(), 1001);
    assert_eq!(value["errors"][0]["category"].as_str().unwrap(), "unknown");
}

#[test]
fn e2e_catalog_schema_generation() {
    let schema = schema_for!(Catalog);
    let serialized = serde_json::to_string(&schema).unwrap();

    assert!(serialized.contains("categories"));
    assert!(serialized.contains("errors"));
    assert!(serialized.contains("code_range"));
}

#[test]
fn e2e_entry_display_is_log_friendly() {
    let entry = ErrorKind::NoAccount.entry_with(&EnglishMessages);
    assert_eq!(entry.to_string(), "[8000] NO_ACCOUNT: No account is bound");
}
