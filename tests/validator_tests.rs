use vindecode::*;

// ---------------------------------------------------------------------------
// Structural validation
// ---------------------------------------------------------------------------

#[test]
fn valid_vin_has_no_errors() {
    let result = validate("1HGCM82633A004352");
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn empty_vin() {
    let result = validate("");
    assert!(!result.valid);
    assert_eq!(result.error_messages(), vec!["VIN cannot be empty"]);
}

#[test]
fn whitespace_only_is_empty() {
    assert_eq!(validate(" \t\n").errors, vec![VinIssue::Empty]);
}

#[test]
fn too_short() {
    let result = validate("1HGCM82633A");
    assert!(!result.valid);
    assert!(result.error_messages()[0].contains("must be exactly 17 characters"));
    assert!(result.error_messages()[0].contains("got 11"));
}

#[test]
fn too_long_reports_only_length() {
    let result = validate("1HGCM82633A004352IOQ");
    assert_eq!(result.errors, vec![VinIssue::InvalidLength { actual: 20 }]);
}

#[test]
fn invalid_characters_scenario() {
    let result = validate("1HGCM82633A12345I");
    assert!(!result.valid);
    assert!(result.error_messages()[0].contains("invalid characters"));
}

#[test]
fn lowercase_forbidden_letter_is_caught_after_normalization() {
    let result = validate("1hgcm82633a12345o");
    assert!(result.errors.contains(&VinIssue::ForbiddenLetters));
}

#[test]
fn is_valid_shorthand() {
    assert!(is_valid("1HGCM82633A123456"));
    assert!(!is_valid("INVALID"));
}

// ---------------------------------------------------------------------------
// Check digit
// ---------------------------------------------------------------------------

#[test]
fn check_digit_scenario() {
    assert_eq!(calculate_check_digit("1M8GDM9AXKP042788"), 'X');
    assert!(validate_check_digit("1M8GDM9AXKP042788"));
    assert!(!validate_check_digit("1M8GDM9A5KP042788"));
}

#[test]
fn numeric_check_digit() {
    assert_eq!(calculate_check_digit("1HGCM82633A004352"), '3');
    assert_eq!(calculate_check_digit("11111111111111111"), '1');
}

#[test]
fn check_digit_is_case_insensitive() {
    assert!(validate_check_digit("1m8gdm9axkp042788"));
}

#[test]
fn north_american_mismatch_is_single_warning() {
    let result = validate("1HGCM82633A123456");
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warning_messages()[0].contains("check digit"));
}

#[test]
fn foreign_vin_checksum_not_enforced() {
    let result = validate("JH4KA7532PC000000");
    assert!(result.valid);
    assert!(result.warnings.is_empty());
}

// ---------------------------------------------------------------------------
// Segments, region, country
// ---------------------------------------------------------------------------

#[test]
fn segments() {
    assert_eq!(wmi("JH4KA7532PC000000"), "JH4");
    assert_eq!(vds("1HGCM82633A123456"), "CM8263");
    assert_eq!(vis("1HGCM82633A123456"), "3A123456");
    assert_eq!(sequential_number("1HGCM82633A123456"), "123456");
    assert_eq!(plant_code("1HGCM82633A123456"), Some('A'));
    assert_eq!(model_year_char("1HGCM82633A123456"), Some('3'));
}

#[test]
fn region_and_country() {
    assert_eq!(region("JH4KA7532PC000000"), Region::Asia);
    assert_eq!(country("JH4KA7532PC000000"), "Japan");
    assert_eq!(region("WDDHF8HB1CA000000").as_str(), "Europe");
    assert_eq!(country("WDDHF8HB1CA000000"), "Germany");
    assert_eq!(country("9BWZZZ377VT004251"), "South America");
}

#[test]
fn north_american() {
    assert!(is_north_american("1HGCM82633A123456"));
    assert!(is_north_american("2HNYD28"));
    assert!(!is_north_american("6FPAAAJG"));
}

// ---------------------------------------------------------------------------
// Model year
// ---------------------------------------------------------------------------

#[test]
fn model_year_pairs_are_thirty_years_apart() {
    for code in "ABCDEFGHJKLMNPRSTVWXY123456789".chars() {
        let c = model_year_candidates(code).unwrap();
        assert_eq!(c.later - c.earlier, 30, "code {code}");
    }
}

#[test]
fn model_year_default_policy() {
    assert_eq!(decode_model_year_for('A', 2025), Some(2010));
    assert_eq!(decode_model_year_for('V', 2025), Some(1997));
    assert_eq!(decode_model_year_for('T', 2025), Some(2026));
    assert_eq!(decode_model_year_for('U', 2025), None);
}

#[test]
fn model_year_of_vin() {
    // position 10 is P: 1993 or 2023
    assert_eq!(model_year("JH4KA7532PC000000"), Some(2023));
}
