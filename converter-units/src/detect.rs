//! Domain detection for a bare unit alias

use converter_core::Domain;
use tracing::debug;
use crate::units::UNITS;

/// Find the domain a unit alias belongs to.
///
/// Domains are scanned in the fixed order Time, Weight, Length, Baking and
/// the first match wins, so "m" is always minutes here. Pass an explicit
/// domain to the converter to reach meters.
pub fn detect(unit: &str) -> Option<Domain> {
    let found = Domain::ALL.into_iter().find(|&d| UNITS.contains(d, unit));
    debug!(unit, domain = ?found, "detected unit domain");
    found
}
