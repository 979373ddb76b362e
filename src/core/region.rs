//! Region and country inference from the WMI.

use serde::{Deserialize, Serialize};

/// Continental region, derived from the first WMI character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    Oceania,
    SouthAmerica,
    Africa,
    Asia,
    Europe,
    Unknown,
}

impl Region {
    /// Region for the first character of a WMI.
    pub fn from_wmi_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            '1'..='5' => Self::NorthAmerica,
            '6' | '7' => Self::Oceania,
            '8' | '9' => Self::SouthAmerica,
            'A'..='E' => Self::Africa,
            'F'..='K' => Self::Asia,
            'L'..='Z' => Self::Europe,
            _ => Self::Unknown,
        }
    }

    /// Display name (e.g. "North America").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region of a VIN or WMI.
pub fn region(vin: &str) -> Region {
    vin.chars()
        .next()
        .map_or(Region::Unknown, Region::from_wmi_char)
}

/// Country of a VIN or WMI.
///
/// Only a curated set of prefixes resolve to a country; everything else
/// falls back to the region name. First matching rule wins.
pub fn country(vin: &str) -> &'static str {
    let mut chars = vin.chars().map(|c| c.to_ascii_uppercase());
    let first = chars.next();
    let second = chars.next();

    match (first, second) {
        (Some('1' | '4' | '5'), _) => "United States",
        (Some('2'), _) => "Canada",
        (Some('3'), _) => "Mexico",
        (Some('S'), Some('A'..='M')) => "United Kingdom",
        (Some('S'), Some('N'..='T')) => "Germany",
        (Some('V'), Some('F'..='R')) => "France",
        (Some('W'), _) => "Germany",
        (Some('Z'), _) => "Italy",
        (Some('J'), _) => "Japan",
        (Some('K'), _) => "South Korea",
        (Some('L'), _) => "China",
        _ => region(vin).as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_by_first_char() {
        assert_eq!(region("1HG"), Region::NorthAmerica);
        assert_eq!(region("6AB"), Region::Oceania);
        assert_eq!(region("93U"), Region::SouthAmerica);
        assert_eq!(region("AAV"), Region::Africa);
        assert_eq!(region("JH4"), Region::Asia);
        assert_eq!(region("KMH"), Region::Asia);
        assert_eq!(region("LVS"), Region::Europe);
        assert_eq!(region("WDD"), Region::Europe);
        assert_eq!(region("0AB"), Region::Unknown);
        assert_eq!(region(""), Region::Unknown);
    }

    #[test]
    fn region_display() {
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
    }

    #[test]
    fn curated_countries() {
        assert_eq!(country("1HG"), "United States");
        assert_eq!(country("2HN"), "Canada");
        assert_eq!(country("3VW"), "Mexico");
        assert_eq!(country("SAL"), "United Kingdom");
        assert_eq!(country("SN1"), "Germany");
        assert_eq!(country("VF1"), "France");
        assert_eq!(country("WBA"), "Germany");
        assert_eq!(country("ZFF"), "Italy");
        assert_eq!(country("JH4"), "Japan");
        assert_eq!(country("KMH"), "South Korea");
        assert_eq!(country("LVS"), "China");
    }

    #[test]
    fn uncurated_prefixes_fall_back_to_region() {
        assert_eq!(country("SU1"), "Europe");
        assert_eq!(country("VS6"), "Europe");
        assert_eq!(country("MAL"), "Europe");
        assert_eq!(country("9BW"), "South America");
        assert_eq!(country("6FP"), "Oceania");
        assert_eq!(country("0XX"), "Unknown");
    }
}
