use vindecode::*;

fn db() -> std::sync::Arc<WmiDatabase> {
    WmiDatabase::embedded()
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn exact_matches() {
    assert_eq!(db().manufacturer("1HG"), "Honda");
    assert_eq!(db().manufacturer("JH4"), "Acura");
    assert!(db().manufacturer("WDD").contains("Mercedes"));
    assert_eq!(db().manufacturer("5TD"), "Toyota");
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(db().manufacturer("1hg"), "Honda");
    assert_eq!(db().manufacturer("jh4"), "Acura");
}

#[test]
fn two_char_prefix_fallback_is_deterministic() {
    // 1HZ is not a code; the smallest 1H* code is 1H4 (Honda)
    assert!(!db().wmi_codes_for_manufacturer("Honda").contains(&"1HZ".to_string()));
    assert_eq!(db().manufacturer("1HZ"), db().manufacturer("1H4"));
    assert_eq!(db().manufacturer("1HZ"), "Honda");
}

#[test]
fn unknown_manufacturer_sentinel() {
    assert_eq!(db().manufacturer("QQQ"), UNKNOWN_MANUFACTURER);
    assert_eq!(db().manufacturer("00A"), "Unknown Manufacturer");
    assert!(!db().has_manufacturer("QQQ"));
    assert!(db().has_manufacturer("1HG"));
}

// ---------------------------------------------------------------------------
// Search and listing
// ---------------------------------------------------------------------------

#[test]
fn database_size() {
    assert_eq!(db().len(), 2015);
    assert!(!db().is_empty());
}

#[test]
fn all_manufacturers_sorted_and_unique() {
    let all = db().all_manufacturers();
    assert!(all.contains(&"Honda".to_string()));
    assert!(all.contains(&"Toyota".to_string()));
    assert!(all.contains(&"Ford".to_string()));
    for window in all.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn search_is_case_insensitive() {
    assert!(db().search_manufacturers("honda").contains(&"Honda".to_string()));
    assert!(!db().search_manufacturers("BMW").is_empty());
    assert!(db().search_manufacturers("NonExistentBrand").is_empty());
}

#[test]
fn codes_for_acura() {
    assert_eq!(db().wmi_codes_for_manufacturer("acura"), vec!["2HN", "5J8", "JH4"]);
}

#[test]
fn codes_for_honda_include_1hg() {
    let codes = db().wmi_codes_for_manufacturer("Honda");
    assert!(codes.contains(&"1HG".to_string()));
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn custom_json_database() {
    let db = WmiDatabase::from_json(
        r#"{
            "1HG": "Honda",
            "1HA": "Honda Prototype",
            "ZFF": "Ferrari"
        }"#,
    )
    .unwrap();
    assert_eq!(db.len(), 3);
    assert_eq!(db.manufacturer("1HX"), "Honda Prototype");
    assert_eq!(db.manufacturer("ZFA"), "Ferrari");
    assert_eq!(db.manufacturer("WBA"), UNKNOWN_MANUFACTURER);
}

#[test]
fn invalid_json_database() {
    let err = WmiDatabase::from_json(r#"{"AB": "Short"}"#).unwrap_err();
    assert!(matches!(err, VinError::Database(_)));
}
