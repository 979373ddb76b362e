use crate::core::{
    self, DecodedVehicle, OfflineDecoder, Region, VIN_LENGTH, ValidationResult, VinError,
    normalize,
};

use super::cache::{CacheKey, TtlCache};
use super::config::DecoderConfig;
use super::remote::{NoRemote, RemoteDecoder};

/// VIN decoder combining the offline decoder with a cached remote registry.
///
/// With `online` enabled, [`decode`](Self::decode) asks the remote registry
/// first and falls back to offline data when the remote call fails.
/// Validation errors are never recovered from.
#[derive(Debug)]
pub struct VinDecoder<R = NoRemote> {
    config: DecoderConfig,
    offline: OfflineDecoder,
    remote: R,
    cache: TtlCache<CacheKey, DecodedVehicle>,
}

impl VinDecoder<NoRemote> {
    /// Decoder without a remote registry. `decode` always uses offline data.
    pub fn offline_only() -> Self {
        Self::new(DecoderConfig::offline(), NoRemote)
    }
}

impl<R: RemoteDecoder> VinDecoder<R> {
    pub fn new(config: DecoderConfig, remote: R) -> Self {
        Self {
            cache: TtlCache::new(config.cache_duration()),
            offline: OfflineDecoder::new(),
            config,
            remote,
        }
    }

    /// Replace the offline decoder, e.g. to use a custom WMI database.
    pub fn with_offline_decoder(mut self, offline: OfflineDecoder) -> Self {
        self.offline = offline;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Decode a VIN, preferring the remote registry when configured online.
    ///
    /// # Errors
    ///
    /// Validation errors. Remote failures are logged and answered from
    /// offline data instead.
    pub async fn decode(
        &self,
        vin: &str,
        year_hint: Option<u16>,
    ) -> Result<DecodedVehicle, VinError> {
        if !self.config.online {
            return self.decode_offline(vin);
        }

        match self.decode_online(vin, year_hint).await {
            Err(VinError::Remote(err)) => {
                tracing::warn!(error = %err, "remote decode failed, falling back to offline decoder");
                self.decode_offline(vin)
            }
            other => other,
        }
    }

    /// Decode using offline data only.
    pub fn decode_offline(&self, vin: &str) -> Result<DecodedVehicle, VinError> {
        self.offline.decode(vin)
    }

    /// Decode via the remote registry only, through the cache.
    ///
    /// # Errors
    ///
    /// Validation errors, or `VinError::Remote` when the registry call fails.
    #[tracing::instrument(skip(self))]
    pub async fn decode_online(
        &self,
        vin: &str,
        year_hint: Option<u16>,
    ) -> Result<DecodedVehicle, VinError> {
        let mut vehicle = self.offline.decode(vin)?;
        let key = CacheKey::new(&vehicle.vin, year_hint);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("cache hit");
            return Ok(cached);
        }
        tracing::debug!("cache miss");

        let remote = self.remote.decode_remote(&vehicle.vin, year_hint).await?;
        vehicle.merge_remote(remote);
        self.cache.insert(key, vehicle.clone());
        Ok(vehicle)
    }

    pub fn validate(&self, vin: &str) -> ValidationResult {
        core::validate(vin)
    }

    pub fn is_valid(&self, vin: &str) -> bool {
        core::is_valid(vin)
    }

    /// Manufacturer for a full VIN or a WMI code.
    pub fn manufacturer(&self, wmi_or_vin: &str) -> &str {
        let normalized = normalize(wmi_or_vin);
        if normalized.chars().count() == VIN_LENGTH {
            self.offline.manufacturer(core::wmi(&normalized))
        } else {
            self.offline.manufacturer(&normalized)
        }
    }

    pub fn has_manufacturer(&self, wmi: &str) -> bool {
        self.offline.has_manufacturer(wmi)
    }

    pub fn search_manufacturers(&self, query: &str) -> Vec<String> {
        self.offline.search_manufacturers(query)
    }

    pub fn all_manufacturers(&self) -> Vec<String> {
        self.offline.all_manufacturers()
    }

    pub fn wmi_codes_for_manufacturer(&self, name: &str) -> Vec<String> {
        self.offline.wmi_codes_for_manufacturer(name)
    }

    pub fn database_size(&self) -> usize {
        self.offline.database_size()
    }

    pub fn region(&self, vin: &str) -> Region {
        core::region(&normalize(vin))
    }

    pub fn country(&self, vin: &str) -> &'static str {
        core::country(&normalize(vin))
    }

    pub fn model_year(&self, vin: &str) -> Option<u16> {
        core::model_year(&normalize(vin))
    }

    pub fn is_north_american(&self, vin: &str) -> bool {
        core::is_north_american(&normalize(vin))
    }

    pub fn wmi(&self, vin: &str) -> String {
        core::wmi(&normalize(vin)).to_string()
    }

    pub fn vds(&self, vin: &str) -> String {
        core::vds(&normalize(vin)).to_string()
    }

    pub fn vis(&self, vin: &str) -> String {
        core::vis(&normalize(vin)).to_string()
    }

    pub fn formatted_info(&self, vin: &str) -> String {
        self.offline.formatted_info(vin)
    }

    /// Drop every cached remote result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Whether a remote result for `(vin, year_hint)` is cached and fresh.
    pub fn is_cached(&self, vin: &str, year_hint: Option<u16>) -> bool {
        self.cache.contains(&CacheKey::new(vin, year_hint))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
