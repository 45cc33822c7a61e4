//! Conversion table: one value shown in every other primary unit

use std::fmt;
use serde::{Serialize, Deserialize};
use converter_core::Domain;
use tracing::debug;
use crate::convert::{convert, DomainSelector};
use crate::detect::detect;
use crate::format::{format_display, format_input};
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Plural names that keep their form for a result of exactly 1
const SINGULAR_EXCEPTIONS: [&str; 3] = ["cups", "inches", "ounces"];

/// Width of the rule printed under the table header
const RULE_WIDTH: usize = 35;

/// A single row of a conversion table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Primary unit name, e.g. "hours"
    pub unit: String,
    /// Name as displayed, singularized when the value is exactly 1
    pub display_unit: String,
    /// Unrounded converted value
    pub value: f64,
    /// Value formatted by magnitude bucket
    pub formatted: String,
}

/// A value expressed in every other primary unit of its domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    pub value: f64,
    /// Source unit as given, lower-cased
    pub from_unit: String,
    pub domain: Domain,
    pub rows: Vec<TableRow>,
}

impl ConversionTable {
    /// Body lines, one per row: "  1,440 hours"
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format!("  {} {}", row.formatted, row.display_unit))
            .collect()
    }

    pub fn row(&self, unit: &str) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.unit == unit)
    }
}

impl fmt::Display for ConversionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} {} converts to:", format_input(self.value), self.from_unit)?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Singular display name for a result of exactly 1.
///
/// A trailing "s" is dropped except for the fixed exception set, and
/// "feet" becomes "foot". Any other name is returned unchanged.
pub fn singularize(unit: &str, value: f64) -> String {
    if value != 1.0 {
        return unit.to_string();
    }
    if unit == "feet" {
        return "foot".to_string();
    }
    match unit.strip_suffix('s') {
        Some(stem) if !SINGULAR_EXCEPTIONS.contains(&unit) => stem.to_string(),
        _ => unit.to_string(),
    }
}

/// Render `value` in `from_unit` against every primary unit of the domain.
///
/// Targets that denote the same physical unit as the source (same scale
/// factor) are skipped. Any failure aborts the whole table.
pub fn render_table(
    selector: impl Into<DomainSelector>,
    value: f64,
    from_unit: &str,
) -> Result<ConversionTable, ConversionError> {
    let domain = match selector.into() {
        DomainSelector::Auto => detect(from_unit).ok_or_else(|| ConversionError::unknown_unit(from_unit, None))?,
        DomainSelector::Explicit(domain) => domain,
    };

    let from_lower = from_unit.to_lowercase();
    let source = UNITS
        .get(domain, &from_lower)
        .ok_or_else(|| ConversionError::unknown_unit(&from_lower, Some(domain)))?;

    let mut rows = Vec::new();
    for &target in UNITS.primary_units(domain) {
        let unit = UNITS.get(domain, target).ok_or_else(|| ConversionError::MissingPrimaryUnit {
            unit: target.to_string(),
            domain,
        })?;
        if unit.is_same_as(source) {
            continue;
        }

        let result = convert(domain, value, &from_lower, target)?;
        rows.push(TableRow {
            unit: target.to_string(),
            display_unit: singularize(target, result),
            value: result,
            formatted: format_display(result),
        });
    }

    debug!(%domain, value, from = %from_lower, rows = rows.len(), "rendered table");
    Ok(ConversionTable {
        value,
        from_unit: from_lower,
        domain,
        rows,
    })
}
