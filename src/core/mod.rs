//! Offline VIN validation and decoding.
//!
//! Everything in this module is pure computation over the VIN string and
//! the read-only WMI database, and is safe to call from any thread.

mod decoder;
mod error;
pub mod model_year;
mod region;
pub mod segments;
mod types;
mod validator;
mod wmi;
mod wmi_data;

pub use decoder::*;
pub use error::*;
pub use model_year::{
    ModelYearCandidates, decode_model_year, decode_model_year_for, decode_model_year_in_range,
    model_year, model_year_candidates,
};
pub use region::*;
pub use segments::{model_year_char, plant_code, sequential_number, vds, vis, wmi};
pub use types::*;
pub use validator::*;
pub use wmi::*;
