//! Online decoding with a time-bounded cache and offline fallback.
//!
//! The remote registry sits behind [`RemoteDecoder`]; this module does no
//! network I/O of its own. The `nhtsa` feature adds a vPIC implementation.
//!
//! # Example
//!
//! ```ignore
//! use vindecode::online::*;
//!
//! let decoder = VinDecoder::nhtsa(DecoderConfig::default())?;
//!
//! // Remote first, offline data if the registry is unreachable
//! let vehicle = decoder.decode("1HGCM82633A004352", None).await?;
//! println!("{} {:?}", vehicle.manufacturer, vehicle.get(Attribute::Model));
//!
//! assert!(decoder.is_cached("1HGCM82633A004352", None));
//! ```

mod cache;
mod config;
mod decoder;
#[cfg(feature = "nhtsa")]
pub mod nhtsa;
mod remote;

pub use cache::{CacheKey, TtlCache};
pub use config::{
    DEFAULT_API_BASE_URL, DEFAULT_CACHE_DURATION_MS, DEFAULT_REMOTE_TIMEOUT_MS, DecoderConfig,
};
pub use decoder::VinDecoder;
#[cfg(feature = "nhtsa")]
pub use nhtsa::NhtsaClient;
pub use remote::{NoRemote, RemoteDecoder};

pub use crate::core::{Attribute, DecodedVehicle, RemoteError, RemoteVehicle};
