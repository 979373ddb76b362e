//! ISO 3779 structural validation and check digit computation.

use serde::{Deserialize, Serialize};

use super::error::VinIssue;

/// Number of characters in every VIN.
pub const VIN_LENGTH: usize = 17;

/// Position weights for the check digit sum. The check digit itself (index 8)
/// carries weight 0.
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Result of validating a VIN.
///
/// `valid` is true iff `errors` is empty. Warnings never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<VinIssue>,
    pub warnings: Vec<VinIssue>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<VinIssue>, warnings: Vec<VinIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Human-readable error messages, in the order they were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Human-readable warning messages, in the order they were found.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Upper-case and trim a raw VIN. Never fails.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validate a VIN against ISO 3779.
///
/// The input is normalized first. Empty input and wrong length stop
/// validation immediately. The `I`/`O`/`Q` check and the general
/// character-set check are independent, so one offending character can
/// produce both errors. For North American VINs (first character `1`-`5`)
/// a check digit mismatch is reported as a warning only.
pub fn validate(vin: &str) -> ValidationResult {
    let vin = normalize(vin);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if vin.is_empty() {
        errors.push(VinIssue::Empty);
        return ValidationResult::from_parts(errors, warnings);
    }

    let actual = vin.chars().count();
    if actual != VIN_LENGTH {
        errors.push(VinIssue::InvalidLength { actual });
        return ValidationResult::from_parts(errors, warnings);
    }

    if vin.chars().any(|c| matches!(c, 'I' | 'O' | 'Q')) {
        errors.push(VinIssue::ForbiddenLetters);
    }

    if !vin.chars().all(is_vin_char) {
        errors.push(VinIssue::IllegalCharacters);
    }

    if is_north_american(&vin) {
        let expected = calculate_check_digit(&vin);
        let found = vin.chars().nth(8).unwrap_or_default();
        if expected != found {
            warnings.push(VinIssue::CheckDigitMismatch { expected, found });
        }
    }

    ValidationResult::from_parts(errors, warnings)
}

/// Shorthand for `validate(vin).valid`.
pub fn is_valid(vin: &str) -> bool {
    validate(vin).valid
}

/// Whether `c` belongs to the VIN alphabet `[A-HJ-NPR-Z0-9]`.
pub fn is_vin_char(c: char) -> bool {
    c.is_ascii_digit() || (c.is_ascii_uppercase() && !matches!(c, 'I' | 'O' | 'Q'))
}

/// Numeric value of a VIN character for the check digit sum.
///
/// Letters cycle through 1-9 (`I`, `O`, `Q` have no value); digits map to
/// themselves.
pub fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => return c.to_digit(10),
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Compute the check digit for position 9.
///
/// Returns `'X'` for a remainder of 10. Any character outside the
/// transliteration table (or a length other than 17) also yields `'X'`.
pub fn calculate_check_digit(vin: &str) -> char {
    let vin = normalize(vin);
    if vin.chars().count() != VIN_LENGTH {
        return 'X';
    }

    let mut sum = 0;
    for (c, weight) in vin.chars().zip(WEIGHTS) {
        match transliterate(c) {
            Some(value) => sum += value * weight,
            None => return 'X',
        }
    }

    match sum % 11 {
        10 => 'X',
        // remainder is 0..=9 here
        r => char::from_digit(r, 10).unwrap_or('X'),
    }
}

/// Check that position 9 holds the computed check digit.
pub fn validate_check_digit(vin: &str) -> bool {
    let vin = normalize(vin);
    if vin.chars().count() != VIN_LENGTH {
        return false;
    }
    vin.chars().nth(8) == Some(calculate_check_digit(&vin))
}

/// Whether the VIN was issued under the North American scheme (`1`-`5`).
pub fn is_north_american(vin: &str) -> bool {
    matches!(vin.trim_start().chars().next(), Some('1'..='5'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_honda_vin() {
        let result = validate("1HGCM82633A123456");
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn lowercase_is_normalized() {
        assert!(validate("  1hgcm82633a123456 ").valid);
    }

    #[test]
    fn empty_stops_early() {
        let result = validate("   ");
        assert!(!result.valid);
        assert_eq!(result.errors, vec![VinIssue::Empty]);
    }

    #[test]
    fn wrong_length_stops_early() {
        let result = validate("1HGCM82633A");
        assert_eq!(result.errors, vec![VinIssue::InvalidLength { actual: 11 }]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn forbidden_letter_reports_both_errors() {
        let result = validate("1HGCM82633A12345I");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![VinIssue::ForbiddenLetters, VinIssue::IllegalCharacters]
        );
    }

    #[test]
    fn punctuation_reports_only_charset_error() {
        let result = validate("1HGCM82633A12345-");
        assert_eq!(result.errors, vec![VinIssue::IllegalCharacters]);
    }

    #[test]
    fn check_digit_x() {
        assert_eq!(calculate_check_digit("1M8GDM9AXKP042788"), 'X');
        assert!(validate_check_digit("1M8GDM9AXKP042788"));
        assert!(!validate_check_digit("1M8GDM9A1KP042788"));
    }

    #[test]
    fn check_digit_mismatch_is_warning() {
        let result = validate("1M8GDM9A1KP042788");
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec![VinIssue::CheckDigitMismatch {
                expected: 'X',
                found: '1'
            }]
        );
    }

    #[test]
    fn non_north_american_skips_check_digit() {
        let result = validate("WDDHF8HB1CA000000");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unknown_character_yields_x() {
        assert_eq!(calculate_check_digit("1M8GDM9AXKP04278*"), 'X');
        assert_eq!(calculate_check_digit("SHORT"), 'X');
    }

    #[test]
    fn transliteration_excludes_ioq() {
        assert_eq!(transliterate('I'), None);
        assert_eq!(transliterate('O'), None);
        assert_eq!(transliterate('Q'), None);
        assert_eq!(transliterate('Z'), Some(9));
        assert_eq!(transliterate('7'), Some(7));
    }

    #[test]
    fn north_american_prefixes() {
        assert!(is_north_american("1HGCM82633A123456"));
        assert!(is_north_american("5TDKZ3DC9HS123456"));
        assert!(!is_north_american("JH4KA7532PC000000"));
        assert!(!is_north_american(""));
    }
}
