//! Conversion between two units of the same domain

use std::str::FromStr;
use converter_core::Domain;
use tracing::debug;
use crate::detect::detect;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Which table to resolve units against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainSelector {
    /// Detect the domain from the unit itself
    #[default]
    Auto,
    /// Resolve only within the given domain
    Explicit(Domain),
}

impl From<Domain> for DomainSelector {
    fn from(domain: Domain) -> Self {
        DomainSelector::Explicit(domain)
    }
}

impl FromStr for DomainSelector {
    type Err = ConversionError;

    /// "auto" or a conversion type token ("time", "t", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(DomainSelector::Auto);
        }
        Ok(DomainSelector::Explicit(s.parse::<Domain>()?))
    }
}

/// Convert `value` between two aliases of `domain`.
///
/// `base = value * scale[from]`, `result = base / scale[to]`.
pub fn convert(domain: Domain, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from = UNITS
        .get(domain, from_unit)
        .ok_or_else(|| ConversionError::unknown_unit(&from_unit.to_lowercase(), Some(domain)))?;
    let to = UNITS
        .get(domain, to_unit)
        .ok_or_else(|| ConversionError::unknown_unit(&to_unit.to_lowercase(), Some(domain)))?;

    let result = from.convert_to(value, to)?;
    debug!(%domain, value, from = %from, to = %to, result, "converted");
    Ok(result)
}

/// Detect both domains independently, then convert.
pub fn convert_auto(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from_domain = detect(from_unit).ok_or_else(|| ConversionError::unknown_unit(from_unit, None))?;
    let to_domain = detect(to_unit).ok_or_else(|| ConversionError::unknown_unit(to_unit, None))?;

    if from_domain != to_domain {
        return Err(ConversionError::CrossDomain {
            from: from_domain,
            to: to_domain,
        });
    }

    convert(from_domain, value, from_unit, to_unit)
}

/// Convert with either an explicit domain or auto-detection
pub fn convert_in(selector: DomainSelector, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    match selector {
        DomainSelector::Auto => convert_auto(value, from_unit, to_unit),
        DomainSelector::Explicit(domain) => convert(domain, value, from_unit, to_unit),
    }
}
