//! Model year decoding from VIN position 10.
//!
//! Each year code stands for two model years 30 years apart (e.g. `A` is
//! 1980 or 2010). The VIN alone cannot tell them apart, so the default
//! policy picks the later year unless it lies more than one year in the
//! future. Callers with better context can use
//! [`decode_model_year_in_range`] or inspect [`model_year_candidates`].

use std::ops::RangeInclusive;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::segments::model_year_char;

/// Year codes in cycle order, starting at 1980 (`A`).
const YEAR_CODES: [char; 30] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V',
    'W', 'X', 'Y', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

const FIRST_CYCLE_START: u16 = 1980;
const CYCLE_LENGTH: u16 = 30;

/// The two model years a year code can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelYearCandidates {
    pub earlier: u16,
    pub later: u16,
}

impl ModelYearCandidates {
    /// Apply the default policy against a given reference year.
    pub fn resolve(&self, current_year: i32) -> u16 {
        if i32::from(self.later) <= current_year + 1 {
            self.later
        } else {
            self.earlier
        }
    }
}

/// Candidate years for a year code, or `None` for an unknown code.
pub fn model_year_candidates(code: char) -> Option<ModelYearCandidates> {
    let code = code.to_ascii_uppercase();
    let index = YEAR_CODES.iter().position(|&c| c == code)?;
    let earlier = FIRST_CYCLE_START + index as u16;
    Some(ModelYearCandidates {
        earlier,
        later: earlier + CYCLE_LENGTH,
    })
}

/// Decode a year code relative to the current calendar year.
pub fn decode_model_year(code: char) -> Option<u16> {
    decode_model_year_for(code, chrono::Utc::now().year())
}

/// Decode a year code relative to a pinned reference year.
pub fn decode_model_year_for(code: char, current_year: i32) -> Option<u16> {
    model_year_candidates(code).map(|c| c.resolve(current_year))
}

/// Decode a year code against a caller-supplied expected range.
///
/// Prefers the later candidate when both fall inside the range; returns
/// `None` when neither does.
pub fn decode_model_year_in_range(code: char, expected: RangeInclusive<u16>) -> Option<u16> {
    let candidates = model_year_candidates(code)?;
    [candidates.later, candidates.earlier]
        .into_iter()
        .find(|year| expected.contains(year))
}

/// Model year of a VIN (position 10), if the code is known.
pub fn model_year(vin: &str) -> Option<u16> {
    model_year_char(vin).and_then(decode_model_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_pairs() {
        let a = model_year_candidates('A').unwrap();
        assert_eq!((a.earlier, a.later), (1980, 2010));
        let y = model_year_candidates('Y').unwrap();
        assert_eq!((y.earlier, y.later), (2000, 2030));
        let nine = model_year_candidates('9').unwrap();
        assert_eq!((nine.earlier, nine.later), (2009, 2039));
    }

    #[test]
    fn excluded_codes_are_unknown() {
        for c in ['I', 'O', 'Q', 'U', 'Z', '0', '-'] {
            assert!(model_year_candidates(c).is_none(), "{c} should be unknown");
        }
    }

    #[test]
    fn later_year_chosen_up_to_next_year() {
        assert_eq!(decode_model_year_for('S', 2024), Some(2025));
        assert_eq!(decode_model_year_for('T', 2024), Some(1996));
        assert_eq!(decode_model_year_for('A', 2024), Some(2010));
    }

    #[test]
    fn lowercase_code_accepted() {
        assert_eq!(decode_model_year_for('p', 2024), Some(2023));
    }

    #[test]
    fn expected_range_overrides_default() {
        assert_eq!(decode_model_year_in_range('A', 1975..=1999), Some(1980));
        assert_eq!(decode_model_year_in_range('A', 1975..=2020), Some(2010));
        assert_eq!(decode_model_year_in_range('A', 1990..=2000), None);
    }

    #[test]
    fn vin_model_year() {
        assert_eq!(model_year("1HGCM82633A123456"), Some(2003));
        assert_eq!(model_year("1HGCM8263"), None);
    }
}
