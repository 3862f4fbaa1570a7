//! Library side of the field-value specification tool.

pub mod fixture;
pub mod logging;
pub mod report;
