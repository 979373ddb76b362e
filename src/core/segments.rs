//! Positional segments of a 17-character VIN.
//!
//! Extraction works on characters, not bytes, and is total: it is defined
//! for any 17-character input whether or not the character set is valid.
//! Inputs of other lengths yield shorter (possibly empty) segments.

/// Characters `start..end` of `s`, clamped to its length.
fn char_range(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(start)..byte_at(end)]
}

/// World Manufacturer Identifier, positions 1-3.
pub fn wmi(vin: &str) -> &str {
    char_range(vin, 0, 3)
}

/// Vehicle Descriptor Section, positions 4-9 (includes the check digit).
pub fn vds(vin: &str) -> &str {
    char_range(vin, 3, 9)
}

/// Vehicle Identifier Section, positions 10-17.
pub fn vis(vin: &str) -> &str {
    char_range(vin, 9, 17)
}

/// Model year code, position 10.
pub fn model_year_char(vin: &str) -> Option<char> {
    vin.chars().nth(9)
}

/// Assembly plant code, position 11.
pub fn plant_code(vin: &str) -> Option<char> {
    vin.chars().nth(10)
}

/// Manufacturer-assigned serial number, positions 12-17.
pub fn sequential_number(vin: &str) -> &str {
    char_range(vin, 11, 17)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HONDA: &str = "1HGCM82633A123456";

    #[test]
    fn honda_segments() {
        assert_eq!(wmi(HONDA), "1HG");
        assert_eq!(vds(HONDA), "CM8263");
        assert_eq!(vis(HONDA), "3A123456");
        assert_eq!(model_year_char(HONDA), Some('3'));
        assert_eq!(plant_code(HONDA), Some('A'));
        assert_eq!(sequential_number(HONDA), "123456");
    }

    #[test]
    fn segments_partition_the_vin() {
        let joined = format!("{}{}{}", wmi(HONDA), vds(HONDA), vis(HONDA));
        assert_eq!(joined, HONDA);
    }

    #[test]
    fn defined_for_invalid_characters() {
        let vin = "ÄÖÜ-_*IOQ!?12345€";
        assert_eq!(vin.chars().count(), 17);
        assert_eq!(wmi(vin), "ÄÖÜ");
        assert_eq!(vds(vin), "-_*IOQ");
        assert_eq!(vis(vin), "!?12345€");
        assert_eq!(sequential_number(vin), "12345€");
    }

    #[test]
    fn short_input_is_clamped() {
        assert_eq!(wmi("1H"), "1H");
        assert_eq!(vds("1H"), "");
        assert_eq!(model_year_char("1H"), None);
    }
}
