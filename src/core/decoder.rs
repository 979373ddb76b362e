use std::sync::Arc;

use super::error::VinError;
use super::model_year::{model_year, model_year_candidates};
use super::region::{country, region};
use super::segments::{model_year_char, plant_code, sequential_number, vds, vis, wmi};
use super::types::DecodedVehicle;
use super::validator::{normalize, validate};
use super::wmi::WmiDatabase;

/// Decodes VINs using only local data.
///
/// Cheap to clone; the WMI database is shared.
#[derive(Debug, Clone)]
pub struct OfflineDecoder {
    db: Arc<WmiDatabase>,
}

impl Default for OfflineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineDecoder {
    /// Decoder backed by the built-in WMI database.
    pub fn new() -> Self {
        Self {
            db: WmiDatabase::embedded(),
        }
    }

    /// Decoder backed by a caller-supplied WMI database.
    pub fn with_database(db: impl Into<Arc<WmiDatabase>>) -> Self {
        Self { db: db.into() }
    }

    /// The WMI database in use.
    pub fn database(&self) -> &WmiDatabase {
        &self.db
    }

    /// Decode a VIN.
    ///
    /// Checksum warnings do not prevent decoding. The model year is left
    /// empty when its code is unknown.
    ///
    /// # Errors
    ///
    /// `VinError::Empty` for blank input, `VinError::InvalidLength` or
    /// `VinError::InvalidCharacters` when validation fails.
    pub fn decode(&self, raw: &str) -> Result<DecodedVehicle, VinError> {
        let vin = normalize(raw);
        let validation = validate(&vin);
        if let Some(err) = VinError::from_issues(&validation.errors) {
            return Err(err);
        }

        let wmi = wmi(&vin).to_string();
        Ok(DecodedVehicle {
            manufacturer: self.db.manufacturer(&wmi).to_string(),
            vds: vds(&vin).to_string(),
            vis: vis(&vin).to_string(),
            sequential_number: sequential_number(&vin).to_string(),
            // length is validated, position 11 exists
            plant_code: plant_code(&vin).unwrap_or_default(),
            region: region(&vin).to_string(),
            country: country(&vin).to_string(),
            model_year: model_year(&vin),
            model_year_candidates: model_year_char(&vin).and_then(model_year_candidates),
            attributes: Default::default(),
            wmi,
            vin,
        })
    }

    /// Manufacturer for a WMI code, see [`WmiDatabase::manufacturer`].
    pub fn manufacturer(&self, wmi: &str) -> &str {
        self.db.manufacturer(wmi)
    }

    pub fn has_manufacturer(&self, wmi: &str) -> bool {
        self.db.has_manufacturer(wmi)
    }

    pub fn search_manufacturers(&self, query: &str) -> Vec<String> {
        self.db.search_manufacturers(query)
    }

    pub fn all_manufacturers(&self) -> Vec<String> {
        self.db.all_manufacturers()
    }

    pub fn wmi_codes_for_manufacturer(&self, name: &str) -> Vec<String> {
        self.db.wmi_codes_for_manufacturer(name)
    }

    /// Number of WMI codes in the database.
    pub fn database_size(&self) -> usize {
        self.db.len()
    }

    /// Multi-line summary of a VIN, or the validation errors if it is invalid.
    pub fn formatted_info(&self, raw: &str) -> String {
        let validation = validate(raw);
        if !validation.valid {
            return format!("Invalid VIN: {}", validation.error_messages().join(", "));
        }

        match self.decode(raw) {
            Ok(v) => {
                let year = v
                    .model_year
                    .map_or_else(|| "Unknown".to_string(), |y| y.to_string());
                [
                    format!("VIN: {}", v.vin),
                    format!("Manufacturer: {}", v.manufacturer),
                    format!("Model Year: {year}"),
                    format!("Region: {}", v.region),
                    format!("Country: {}", v.country),
                    format!("WMI: {}", v.wmi),
                    format!("VDS: {}", v.vds),
                    format!("VIS: {}", v.vis),
                    format!("Sequential Number: {}", v.sequential_number),
                ]
                .join("\n")
            }
            Err(e) => format!("Invalid VIN: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_custom_database() {
        let db = WmiDatabase::from_entries([("1HG", "Honda of America")]);
        let decoder = OfflineDecoder::with_database(db);
        let v = decoder.decode("1HGCM82633A004352").unwrap();
        assert_eq!(v.manufacturer, "Honda of America");
        assert_eq!(decoder.database_size(), 1);
    }

    #[test]
    fn unknown_year_code_is_absent() {
        // position 10 is 'Z', which is not a year code
        let v = OfflineDecoder::new().decode("1HGCM8263ZA004352").unwrap();
        assert_eq!(v.model_year, None);
        assert_eq!(v.model_year_candidates, None);
    }

    #[test]
    fn plant_code_is_position_11() {
        let v = OfflineDecoder::new().decode("1HGCM82633A004352").unwrap();
        assert_eq!(v.plant_code, 'A');
    }

    #[test]
    fn empty_is_dedicated_error() {
        let err = OfflineDecoder::new().decode("  ").unwrap_err();
        assert!(matches!(err, VinError::Empty));
    }
}
