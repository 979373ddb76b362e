//! # vindecode
//!
//! Validation and decoding of ISO 3779 Vehicle Identification Numbers:
//! structure, check digit, model year, region/country and manufacturer
//! (WMI) lookup, with an optional cached online path that augments the
//! offline result from a remote registry.
//!
//! ## Quick Start
//!
//! ```rust
//! use vindecode::core::*;
//!
//! let result = validate("1HGCM82633A004352");
//! assert!(result.valid);
//!
//! let vehicle = OfflineDecoder::new().decode("1HGCM82633A004352").unwrap();
//! assert_eq!(vehicle.manufacturer, "Honda");
//! assert_eq!(vehicle.wmi, "1HG");
//! assert_eq!(vehicle.country, "United States");
//! assert_eq!(calculate_check_digit("1M8GDM9AXKP042788"), 'X');
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Validation, check digit, model year, region, WMI database, offline decoding |
//! | `online` | `VinDecoder` with TTL cache and fallback over a [`RemoteDecoder`](online::RemoteDecoder) |
//! | `nhtsa` | NHTSA vPIC client implementing the remote decoder |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "online")]
pub mod online;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
