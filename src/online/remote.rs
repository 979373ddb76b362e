//! Interface to a remote vehicle registry.

use async_trait::async_trait;

use crate::core::{RemoteError, RemoteVehicle};

/// A remote registry that can decode a VIN.
///
/// Implementations own transport concerns, including timeouts. The VIN
/// passed in is already normalized and validated.
#[async_trait]
pub trait RemoteDecoder: Send + Sync {
    /// Decode `vin`, optionally hinting the expected model year.
    ///
    /// # Errors
    ///
    /// Any network failure, non-success status or unusable response.
    async fn decode_remote(
        &self,
        vin: &str,
        year_hint: Option<u16>,
    ) -> Result<RemoteVehicle, RemoteError>;
}

/// Remote decoder that always fails; for offline-only decoders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemote;

#[async_trait]
impl RemoteDecoder for NoRemote {
    async fn decode_remote(
        &self,
        _vin: &str,
        _year_hint: Option<u16>,
    ) -> Result<RemoteVehicle, RemoteError> {
        Err(RemoteError::Network("no remote registry configured".into()))
    }
}
