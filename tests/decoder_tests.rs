use vindecode::*;

fn decoder() -> OfflineDecoder {
    OfflineDecoder::new()
}

// ---------------------------------------------------------------------------
// Decode scenarios
// ---------------------------------------------------------------------------

#[test]
fn decode_honda() {
    let v = decoder().decode("1HGCM82633A123456").unwrap();
    assert_eq!(v.vin, "1HGCM82633A123456");
    assert_eq!(v.manufacturer, "Honda");
    assert_eq!(v.wmi, "1HG");
    // position 10 is '3': 2003 or 2033
    assert_eq!(v.model_year, Some(2003));
    assert_eq!(
        v.model_year_candidates,
        Some(ModelYearCandidates {
            earlier: 2003,
            later: 2033
        })
    );
    assert_eq!(v.region, "North America");
    assert_eq!(v.country, "United States");
    assert!(v.attributes.is_empty());
}

#[test]
fn decode_acura() {
    let v = decoder().decode("JH4KA7532PC000000").unwrap();
    assert_eq!(v.manufacturer, "Acura");
    assert_eq!(v.wmi, "JH4");
    assert_eq!(v.region, "Asia");
    assert_eq!(v.country, "Japan");
}

#[test]
fn decode_toyota() {
    let v = decoder().decode("5TDKZ3DC9HS123456").unwrap();
    assert!(v.manufacturer.contains("Toyota"));
    assert_eq!(v.wmi, "5TD");
    assert_eq!(v.region, "North America");
}

#[test]
fn decode_mercedes() {
    let v = decoder().decode("WDDHF8HB1CA000000").unwrap();
    assert!(v.manufacturer.contains("Mercedes"));
    assert_eq!(v.region, "Europe");
    assert_eq!(v.country, "Germany");
}

#[test]
fn decode_normalizes_input() {
    let v = decoder().decode("  1hgcm82633a123456 ").unwrap();
    assert_eq!(v.vin, "1HGCM82633A123456");
    assert_eq!(v.manufacturer, "Honda");
}

#[test]
fn decode_segments_partition_vin() {
    let v = decoder().decode("1HGCM82633A004352").unwrap();
    assert_eq!(format!("{}{}{}", v.wmi, v.vds, v.vis), v.vin);
    assert_eq!(v.sequential_number, "004352");
}

#[test]
fn checksum_warning_does_not_block_decode() {
    assert!(!validate("1HGCM82633A123456").warnings.is_empty());
    assert!(decoder().decode("1HGCM82633A123456").is_ok());
}

#[test]
fn unknown_manufacturer_is_not_an_error() {
    let v = decoder().decode("00ABC12345A123456").unwrap();
    assert_eq!(v.manufacturer, UNKNOWN_MANUFACTURER);
    assert_eq!(v.region, "Unknown");
    assert_eq!(v.country, "Unknown");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn empty_vin_error() {
    let err = decoder().decode("").unwrap_err();
    assert!(matches!(err, VinError::Empty));
    assert_eq!(err.to_string(), "VIN cannot be empty");
}

#[test]
fn short_vin_error() {
    let err = decoder().decode("INVALID").unwrap_err();
    assert!(matches!(err, VinError::InvalidLength { actual: 7 }));
    assert!(err.to_string().starts_with("invalid VIN"));
}

#[test]
fn invalid_characters_error_carries_all_reasons() {
    let err = decoder().decode("1HGCM82633A12345Q").unwrap_err();
    let VinError::InvalidCharacters(issues) = &err else {
        panic!("expected InvalidCharacters, got {err:?}");
    };
    assert_eq!(
        issues,
        &vec![VinIssue::ForbiddenLetters, VinIssue::IllegalCharacters]
    );
    assert!(err.to_string().contains("I, O, Q are not allowed"));
}

// ---------------------------------------------------------------------------
// Formatted summary
// ---------------------------------------------------------------------------

#[test]
fn formatted_info_valid() {
    insta::assert_snapshot!(decoder().formatted_info("1HGCM82633A004352"), @r"
    VIN: 1HGCM82633A004352
    Manufacturer: Honda
    Model Year: 2003
    Region: North America
    Country: United States
    WMI: 1HG
    VDS: CM8263
    VIS: 3A004352
    Sequential Number: 004352
    ");
}

#[test]
fn formatted_info_invalid() {
    assert_eq!(
        decoder().formatted_info("1HGCM82633A"),
        "Invalid VIN: VIN must be exactly 17 characters (got 11)"
    );
}

#[test]
fn formatted_info_unknown_year() {
    let info = decoder().formatted_info("1HGCM8263ZA004352");
    assert!(info.contains("Model Year: Unknown"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn decoder_is_shareable_across_threads() {
    let decoder = std::sync::Arc::new(decoder());
    let handles: Vec<_> = ["1HGCM82633A004352", "JH4KA7532PC000000", "WDDHF8HB1CA000000"]
        .into_iter()
        .map(|vin| {
            let decoder = std::sync::Arc::clone(&decoder);
            std::thread::spawn(move || decoder.decode(vin).unwrap().manufacturer)
        })
        .collect();
    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names[0], "Honda");
    assert_eq!(names[1], "Acura");
    assert!(names[2].contains("Mercedes"));
}
