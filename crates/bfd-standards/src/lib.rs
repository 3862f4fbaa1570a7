#![deny(unsafe_code)]

//! Loading of the field-value specification and its side resources.
//!
//! Everything here runs once at startup; the values produced are read-only
//! afterwards and may be shared across export threads.

pub mod carriers;
pub mod config;
pub mod error;
pub mod paths;
pub mod spec;
pub mod states;

pub use crate::carriers::{CarrierTable, load_carriers};
pub use crate::config::ExporterConfig;
pub use crate::error::StandardsError;
pub use crate::paths::{default_carrier_path, default_spec_path, resources_root};
pub use crate::spec::{load_spec, parse_spec};
pub use crate::states::state_code;
