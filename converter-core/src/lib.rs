//! Converter Core - Fundamental types
//!
//! This crate provides the core types used throughout the converter:
//! - `Domain`: The four measurement domains and their base units
//! - `ConverterError`: Structured errors with machine-readable codes

mod domain;
mod error;

pub use domain::{Domain, DomainParseError};
pub use error::{ConverterError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Domain, ConverterError};
    pub use crate::error::codes;
}
