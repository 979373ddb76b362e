//! World Manufacturer Identifier (WMI) database.
//!
//! An immutable code-to-manufacturer mapping with an exact lookup and a
//! two-character prefix fallback. Codes are kept in ascending order, so the
//! fallback is reproducible: the smallest code sharing the prefix wins.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, LazyLock};

use super::error::VinError;
use super::wmi_data::WMI_ENTRIES;

/// Returned when neither exact nor prefix lookup finds a manufacturer.
pub const UNKNOWN_MANUFACTURER: &str = "Unknown Manufacturer";

static EMBEDDED: LazyLock<Arc<WmiDatabase>> = LazyLock::new(|| {
    let db = WmiDatabase::from_entries(WMI_ENTRIES.iter().copied());
    tracing::debug!("loaded embedded WMI database with {} codes", db.len());
    Arc::new(db)
});

/// Read-only WMI database.
#[derive(Debug, Clone, Default)]
pub struct WmiDatabase {
    codes: BTreeMap<String, String>,
    /// Two-character prefix to all codes sharing it, ascending.
    by_prefix: HashMap<String, Vec<String>>,
}

impl WmiDatabase {
    /// The built-in database, shared across all callers.
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Build from `(code, manufacturer)` pairs. Codes are upper-cased; a
    /// repeated code keeps the last manufacturer.
    pub fn from_entries<C, M>(entries: impl IntoIterator<Item = (C, M)>) -> Self
    where
        C: AsRef<str>,
        M: Into<String>,
    {
        let codes: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(code, name)| (code.as_ref().trim().to_uppercase(), name.into()))
            .collect();

        let mut by_prefix: HashMap<String, Vec<String>> = HashMap::new();
        for code in codes.keys() {
            if let Some(prefix) = prefix2(code) {
                by_prefix
                    .entry(prefix.to_string())
                    .or_default()
                    .push(code.clone());
            }
        }

        Self { codes, by_prefix }
    }

    /// Load from a JSON object of the form `{ "1HG": "Honda", ... }`.
    ///
    /// # Errors
    ///
    /// Returns `VinError::Database` if the JSON is malformed or a code is
    /// not exactly 3 characters long.
    pub fn from_json(json: &str) -> Result<Self, VinError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| VinError::Database(e.to_string()))?;

        if let Some(bad) = raw.keys().find(|code| code.trim().chars().count() != 3) {
            return Err(VinError::Database(format!(
                "WMI code '{bad}' must be exactly 3 characters"
            )));
        }

        let db = Self::from_entries(raw);
        tracing::debug!("loaded WMI database with {} codes", db.len());
        Ok(db)
    }

    /// Manufacturer for a WMI code (case-insensitive).
    ///
    /// Tries the exact 3-character code, then the first code sharing its
    /// first two characters. Returns [`UNKNOWN_MANUFACTURER`] on a miss.
    pub fn manufacturer(&self, wmi: &str) -> &str {
        let wmi: String = wmi.trim().to_uppercase().chars().take(3).collect();

        if let Some(name) = self.codes.get(&wmi) {
            return name;
        }

        prefix2(&wmi)
            .and_then(|prefix| self.by_prefix.get(prefix))
            .and_then(|codes| codes.first())
            .and_then(|code| self.codes.get(code))
            .map_or(UNKNOWN_MANUFACTURER, String::as_str)
    }

    /// Whether a lookup for `wmi` resolves to a known manufacturer.
    pub fn has_manufacturer(&self, wmi: &str) -> bool {
        self.manufacturer(wmi) != UNKNOWN_MANUFACTURER
    }

    /// Manufacturer names containing `query` (case-insensitive), sorted and
    /// deduplicated.
    pub fn search_manufacturers(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.codes
            .values()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All manufacturer names, sorted and deduplicated.
    pub fn all_manufacturers(&self) -> Vec<String> {
        self.codes
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// WMI codes whose manufacturer name contains `name` (case-insensitive),
    /// in ascending code order.
    pub fn wmi_codes_for_manufacturer(&self, name: &str) -> Vec<String> {
        let needle = name.to_lowercase();
        self.codes
            .iter()
            .filter(|(_, mfr)| mfr.to_lowercase().contains(&needle))
            .map(|(code, _)| code.clone())
            .collect()
    }

    /// Number of WMI codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// First two characters, if there are at least two.
fn prefix2(code: &str) -> Option<&str> {
    let end = code.char_indices().nth(2).map_or(code.len(), |(i, _)| i);
    (code[..end].chars().count() == 2).then(|| &code[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_db() -> WmiDatabase {
        WmiDatabase::from_entries([
            ("1HG", "Honda"),
            ("1H4", "Honda"),
            ("JH4", "Acura"),
            ("WDD", "Mercedes-Benz"),
            ("wdb", "Mercedes-Benz"),
        ])
    }

    #[test]
    fn embedded_table_is_sorted_and_unique() {
        for window in WMI_ENTRIES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "WMI codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn embedded_size() {
        assert_eq!(WmiDatabase::embedded().len(), 2015);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let db = small_db();
        assert_eq!(db.manufacturer("1hg"), "Honda");
        assert_eq!(db.manufacturer("WDB"), "Mercedes-Benz");
    }

    #[test]
    fn prefix_fallback_takes_smallest_code() {
        let db = WmiDatabase::from_entries([("1HZ", "Later"), ("1HA", "Earlier")]);
        assert_eq!(db.manufacturer("1HX"), "Earlier");
    }

    #[test]
    fn unknown_code() {
        let db = small_db();
        assert_eq!(db.manufacturer("QQQ"), UNKNOWN_MANUFACTURER);
        assert_eq!(db.manufacturer("1"), UNKNOWN_MANUFACTURER);
        assert_eq!(db.manufacturer(""), UNKNOWN_MANUFACTURER);
        assert!(!db.has_manufacturer("QQQ"));
    }

    #[test]
    fn full_vin_is_reduced_to_wmi() {
        assert_eq!(small_db().manufacturer("JH4KA7532PC000000"), "Acura");
    }

    #[test]
    fn search_dedupes_and_sorts() {
        let db = small_db();
        assert_eq!(db.search_manufacturers("mercedes"), vec!["Mercedes-Benz"]);
        assert_eq!(db.all_manufacturers(), vec!["Acura", "Honda", "Mercedes-Benz"]);
        assert!(db.search_manufacturers("Tesla").is_empty());
    }

    #[test]
    fn codes_for_manufacturer() {
        let db = small_db();
        assert_eq!(db.wmi_codes_for_manufacturer("honda"), vec!["1H4", "1HG"]);
    }

    #[test]
    fn json_loading() {
        let db = WmiDatabase::from_json(r#"{"1hg": "Honda", "JH4": "Acura"}"#).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.manufacturer("1HG"), "Honda");
    }

    #[test]
    fn json_rejects_bad_codes() {
        let err = WmiDatabase::from_json(r#"{"1HGX": "Honda"}"#).unwrap_err();
        assert!(err.to_string().contains("1HGX"));
        assert!(WmiDatabase::from_json("not json").is_err());
    }
}
