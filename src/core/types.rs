use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model_year::ModelYearCandidates;

/// A decoded VIN.
///
/// The core fields are always present. `attributes` holds the optional
/// details a remote registry may supply; absent details are simply missing
/// from the map, never stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedVehicle {
    /// Normalized 17-character VIN.
    pub vin: String,
    /// Positions 1-3.
    pub wmi: String,
    /// Positions 4-9.
    pub vds: String,
    /// Positions 10-17.
    pub vis: String,
    /// Positions 12-17.
    pub sequential_number: String,
    /// Position 11.
    pub plant_code: char,
    /// Manufacturer name, or "Unknown Manufacturer".
    pub manufacturer: String,
    /// Continental region name.
    pub region: String,
    /// Country name, or the region name when the prefix is not curated.
    pub country: String,
    /// Best-effort model year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<u16>,
    /// Both years the position-10 code can stand for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year_candidates: Option<ModelYearCandidates>,
    /// Registry-supplied details.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<Attribute, String>,
}

impl DecodedVehicle {
    /// Value of a registry-supplied attribute.
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    /// Overlay a remote registry result on this record.
    ///
    /// Remote manufacturer and model year replace the offline values when
    /// present. Structure, region and country stay derived from the VIN.
    pub fn merge_remote(&mut self, remote: RemoteVehicle) {
        if let Some(manufacturer) = remote.manufacturer {
            self.manufacturer = manufacturer;
        }
        if let Some(year) = remote.model_year {
            self.model_year = Some(year);
        }
        self.attributes.extend(
            remote
                .attributes
                .into_iter()
                .filter(|(_, value)| !value.trim().is_empty()),
        );
    }
}

/// What a remote registry returns for a VIN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVehicle {
    pub manufacturer: Option<String>,
    pub model_year: Option<u16>,
    pub attributes: BTreeMap<Attribute, String>,
}

macro_rules! attributes {
    ($($(#[$doc:meta])* $variant:ident => $column:literal,)+) => {
        /// Optional vehicle attribute supplied by a remote registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Attribute {
            $($(#[$doc])* $variant,)+
        }

        impl Attribute {
            /// Every known attribute, in declaration order.
            pub const ALL: &'static [Attribute] = &[$(Attribute::$variant,)+];

            /// Column name in the NHTSA vPIC `DecodeVinValues` response.
            pub fn column(&self) -> &'static str {
                match self {
                    $(Self::$variant => $column,)+
                }
            }

            /// Attribute for a vPIC column name.
            pub fn from_column(column: &str) -> Option<Self> {
                match column {
                    $($column => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

attributes! {
    Make => "Make",
    ManufacturerName => "ManufacturerName",
    Model => "Model",
    BodyClass => "BodyClass",
    Doors => "Doors",
    Windows => "Windows",
    WheelBase => "WheelBase",
    WheelBaseShort => "WheelBaseShort",
    WheelBaseLong => "WheelBaseLong",
    TrailerType => "TrailerType",
    TrailerLength => "TrailerLength",
    EngineCylinders => "EngineCylinders",
    DisplacementCc => "DisplacementCC",
    DisplacementCi => "DisplacementCI",
    DisplacementL => "DisplacementL",
    EngineModel => "EngineModel",
    EngineManufacturer => "EngineManufacturer",
    EngineConfiguration => "EngineConfiguration",
    EngineHp => "EngineHP",
    EngineKw => "EngineKW",
    FuelTypePrimary => "FuelTypePrimary",
    FuelTypeSecondary => "FuelTypeSecondary",
    TransmissionStyle => "TransmissionStyle",
    TransmissionSpeeds => "TransmissionSpeeds",
    DriveType => "DriveType",
    /// Anti-lock braking system.
    Abs => "ABS",
    AirBagLocCurtain => "AirBagLocCurtain",
    AirBagLocFront => "AirBagLocFront",
    AirBagLocSide => "AirBagLocSide",
    SeatBeltsAll => "SeatBeltsAll",
    ElectrificationLevel => "ElectrificationLevel",
    EvDriveUnit => "EVDriveUnit",
    BatteryType => "BatteryType",
    BatteryA => "BatteryA",
    BatteryV => "BatteryV",
    BatteryKwh => "BatteryKWh",
    BatteryModules => "BatteryModules",
    BatteryCells => "BatteryCells",
    ChargerLevel => "ChargerLevel",
    ChargerPowerKw => "ChargerPowerKW",
    /// Gross vehicle weight rating class.
    Gvwr => "GVWR",
    GvwrFrom => "GVWRFrom",
    GvwrTo => "GVWRTo",
    CurbWeightLb => "CurbWeightLB",
    Trim => "Trim",
    Trim2 => "Trim2",
    Series => "Series",
    Series2 => "Series2",
    VehicleType => "VehicleType",
    VehicleDescriptor => "VehicleDescriptor",
    PlantCity => "PlantCity",
    PlantState => "PlantState",
    PlantCountry => "PlantCountry",
    PlantCompanyName => "PlantCompanyName",
    /// Registry decode status code ("0" means clean decode).
    ErrorCode => "ErrorCode",
    ErrorText => "ErrorText",
}
