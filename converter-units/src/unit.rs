//! Unit representation with its scale factor

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use converter_core::{codes, ConverterError, Domain, DomainParseError};

/// A named unit within one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Canonical (primary) name, e.g. "kilograms"
    pub name: String,
    /// Domain the unit belongs to
    pub domain: Domain,
    /// Factor to the domain base unit (value_base = value * scale)
    pub scale: f64,
}

impl Unit {
    pub fn new(name: &str, domain: Domain, scale: f64) -> Self {
        Unit {
            name: name.to_string(),
            domain,
            scale,
        }
    }

    /// Check if this is the base unit of its domain
    pub fn is_base(&self) -> bool {
        self.scale == 1.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.domain == other.domain
    }

    /// Same physical unit: same domain and same scale factor
    pub fn is_same_as(&self, other: &Unit) -> bool {
        self.is_compatible(other) && self.scale == other.scale
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale
    }

    pub fn from_base(&self, base: f64) -> f64 {
        base / self.scale
    }

    /// Convert a value in this unit to `target`, going through the base unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::CrossDomain {
                from: self.domain,
                to: target.domain,
            });
        }

        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Alias absent from the relevant table; `domain` is `None` when no
    /// domain could be detected at all
    #[error("Unknown {}unit: {unit}", domain_prefix(.domain))]
    UnknownUnit { unit: String, domain: Option<Domain> },

    /// Auto-detected domains of the two units differ
    #[error("Cannot convert between {from} and {to} units")]
    CrossDomain { from: Domain, to: Domain },

    /// Conversion type token is not a domain
    #[error("Unknown conversion type: {0}")]
    UnknownDomain(String),

    /// A primary unit is missing from its own domain table
    #[error("primary unit {unit} missing from {domain} table")]
    MissingPrimaryUnit { unit: String, domain: Domain },
}

fn domain_prefix(domain: &Option<Domain>) -> String {
    match domain {
        Some(d) => format!("{} ", d),
        None => String::new(),
    }
}

impl ConversionError {
    pub fn unknown_unit(unit: &str, domain: Option<Domain>) -> Self {
        ConversionError::UnknownUnit {
            unit: unit.to_string(),
            domain,
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConversionError::CrossDomain { .. } => codes::CROSS_DOMAIN,
            ConversionError::UnknownDomain(_) => codes::UNKNOWN_DOMAIN,
            ConversionError::MissingPrimaryUnit { .. } => codes::INTERNAL,
        }
    }
}

impl From<DomainParseError> for ConversionError {
    fn from(err: DomainParseError) -> Self {
        ConversionError::UnknownDomain(err.0)
    }
}

impl From<ConversionError> for ConverterError {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::UnknownUnit { domain: Some(d), .. } => {
                ConverterError::new(codes::UNKNOWN_UNIT, message)
                    .with_suggestion(format!("Known {} units: {}", d, crate::UNITS.primary_units(d).join(", ")))
            }
            ConversionError::UnknownUnit { domain: None, .. } => {
                ConverterError::new(codes::UNKNOWN_UNIT, message)
                    .with_suggestion("Use -h to list the auto-detected units")
            }
            ConversionError::CrossDomain { .. } => ConverterError::new(codes::CROSS_DOMAIN, message)
                .with_suggestion("Both units must measure the same kind of quantity"),
            ConversionError::UnknownDomain(_) => ConverterError::new(codes::UNKNOWN_DOMAIN, message)
                .with_suggestion("Use one of: time (t), weight (w), length (l), baking (b)"),
            ConversionError::MissingPrimaryUnit { .. } => ConverterError::internal(message),
        }
    }
}
