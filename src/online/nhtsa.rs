//! NHTSA vPIC `DecodeVinValues` client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{Attribute, RemoteError, RemoteVehicle};

use super::config::DecoderConfig;
use super::decoder::VinDecoder;
use super::remote::RemoteDecoder;

const USER_AGENT: &str = concat!("vindecode/", env!("CARGO_PKG_VERSION"));

/// vPIC response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodeResponse {
    #[serde(default)]
    results: Vec<serde_json::Map<String, Value>>,
}

/// Remote decoder backed by the NHTSA vPIC REST API.
#[derive(Debug, Clone)]
pub struct NhtsaClient {
    http: reqwest::Client,
    base_url: String,
}

impl NhtsaClient {
    /// Build a client using the base URL and timeout from `config`.
    ///
    /// # Errors
    ///
    /// `RemoteError::Network` if the HTTP client cannot be built.
    pub fn new(config: &DecoderConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(config.remote_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn decode_url(&self, vin: &str, year_hint: Option<u16>) -> String {
        match year_hint {
            Some(year) => format!(
                "{}/DecodeVinValues/{vin}?format=json&modelyear={year}",
                self.base_url
            ),
            None => format!("{}/DecodeVinValues/{vin}?format=json", self.base_url),
        }
    }
}

#[async_trait]
impl RemoteDecoder for NhtsaClient {
    #[tracing::instrument(skip(self))]
    async fn decode_remote(
        &self,
        vin: &str,
        year_hint: Option<u16>,
    ) -> Result<RemoteVehicle, RemoteError> {
        let resp = self
            .http
            .get(self.decode_url(vin, year_hint))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_decode_response(&body)
    }
}

impl VinDecoder<NhtsaClient> {
    /// Decoder backed by the vPIC API, configured from `config`.
    ///
    /// # Errors
    ///
    /// `RemoteError::Network` if the HTTP client cannot be built.
    pub fn nhtsa(config: DecoderConfig) -> Result<Self, RemoteError> {
        let client = NhtsaClient::new(&config)?;
        Ok(Self::new(config, client))
    }
}

/// Map a `DecodeVinValues` JSON body onto a [`RemoteVehicle`].
///
/// Only the first result row is used. Null and empty columns are dropped.
pub fn parse_decode_response(body: &str) -> Result<RemoteVehicle, RemoteError> {
    let resp: DecodeResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))?;
    let row = resp.results.into_iter().next().ok_or(RemoteError::NoResults)?;

    let mut vehicle = RemoteVehicle::default();
    for (column, value) in row {
        let Some(text) = column_text(&value) else {
            continue;
        };
        match column.as_str() {
            "Manufacturer" => vehicle.manufacturer = Some(text),
            "ModelYear" => vehicle.model_year = text.parse().ok(),
            other => {
                if let Some(attribute) = Attribute::from_column(other) {
                    vehicle.attributes.insert(attribute, text);
                }
            }
        }
    }
    Ok(vehicle)
}

fn column_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HONDA_BODY: &str = r#"{
        "Count": 1,
        "Message": "Results returned successfully",
        "SearchCriteria": "VIN:1HGCM82633A004352",
        "Results": [{
            "Make": "HONDA",
            "Manufacturer": "AMERICAN HONDA MOTOR CO., INC.",
            "Model": "Accord",
            "ModelYear": "2003",
            "BodyClass": "Coupe",
            "Doors": "2",
            "EngineCylinders": "6",
            "DisplacementL": "3.0",
            "FuelTypePrimary": "Gasoline",
            "PlantCountry": "UNITED STATES (USA)",
            "Trim": "",
            "Series": null,
            "ErrorCode": "0",
            "ErrorText": "0 - VIN decoded clean. Check Digit (9th position) is correct",
            "SomeNewColumn": "ignored"
        }]
    }"#;

    fn client(base: &str) -> NhtsaClient {
        NhtsaClient::new(&DecoderConfig::default().with_api_base_url(base)).unwrap()
    }

    #[test]
    fn url_without_year() {
        assert_eq!(
            client("https://vpic.example/api/vehicles/").decode_url("1HGCM82633A004352", None),
            "https://vpic.example/api/vehicles/DecodeVinValues/1HGCM82633A004352?format=json"
        );
    }

    #[test]
    fn url_with_year() {
        assert_eq!(
            client("https://vpic.example").decode_url("1HGCM82633A004352", Some(2003)),
            "https://vpic.example/DecodeVinValues/1HGCM82633A004352?format=json&modelyear=2003"
        );
    }

    #[test]
    fn parses_known_columns() {
        let vehicle = parse_decode_response(HONDA_BODY).unwrap();
        assert_eq!(
            vehicle.manufacturer.as_deref(),
            Some("AMERICAN HONDA MOTOR CO., INC.")
        );
        assert_eq!(vehicle.model_year, Some(2003));
        assert_eq!(vehicle.attributes[&Attribute::Model], "Accord");
        assert_eq!(vehicle.attributes[&Attribute::DisplacementL], "3.0");
        assert_eq!(vehicle.attributes[&Attribute::ErrorCode], "0");
    }

    #[test]
    fn drops_empty_and_null_columns() {
        let vehicle = parse_decode_response(HONDA_BODY).unwrap();
        assert!(!vehicle.attributes.contains_key(&Attribute::Trim));
        assert!(!vehicle.attributes.contains_key(&Attribute::Series));
        assert_eq!(vehicle.attributes.len(), 10);
    }

    #[test]
    fn empty_results_is_error() {
        let err = parse_decode_response(r#"{"Count":0,"Results":[]}"#).unwrap_err();
        assert!(matches!(err, RemoteError::NoResults));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_decode_response("<html>").unwrap_err();
        assert!(matches!(err, RemoteError::Parse(_)));
    }
}
