//! Converter Units - Unit tables and the conversion engine
//!
//! Four independent domains, each with a base unit of scale factor 1:
//! - Time (seconds)
//! - Weight (grams)
//! - Length (meters)
//! - Baking / volume (milliliters)
//!
//! Aliases are matched case-insensitively. The same alias may live in more
//! than one domain ("m" is minutes and meters); auto-detection resolves it
//! by the fixed domain priority Time, Weight, Length, Baking.

mod unit;
mod units;
mod detect;
mod convert;
mod format;
mod table;

pub use unit::{Unit, ConversionError};
pub use units::{UnitRegistry, UNITS};
pub use detect::detect;
pub use convert::{convert, convert_auto, convert_in, DomainSelector};
pub use format::{format_display, format_general, format_input, group_thousands};
pub use table::{render_table, singularize, ConversionTable, TableRow};

pub use converter_core::Domain;
