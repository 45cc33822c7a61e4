//! Text and JSON rendering of results and errors

use serde::Serialize;
use serde_json::json;
use converter_core::{codes, ConverterError};
use converter_units::{format_general, format_input, ConversionTable};
use crate::config::OutputFormat;

/// Significant digits for a single conversion result
const RESULT_SIGNIFICANT_DIGITS: usize = 6;

/// Result of a single from→to conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutput {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub formatted: String,
}

impl ConversionOutput {
    pub fn new(value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
            formatted: format_general(result, RESULT_SIGNIFICANT_DIGITS),
        }
    }

    /// "60.0 s = 1 minutes"
    pub fn to_text(&self) -> String {
        format!(
            "{} {} = {} {}\n",
            format_input(self.value),
            self.from_unit,
            self.formatted,
            self.to_unit
        )
    }
}

pub fn render_conversion(output: &ConversionOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => output.to_text(),
        OutputFormat::Json => to_json_line(output),
    }
}

pub fn render_table(table: &ConversionTable, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => table.to_string(),
        OutputFormat::Json => to_json_line(table),
    }
}

pub fn render_error(err: &ConverterError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format!("{}\n", json!({ "error": err })),
        OutputFormat::Text if err.code == codes::PERMISSION_DENIED => match &err.suggestion {
            Some(hint) => format!("{}\n{}\n", err.message, hint),
            None => format!("{}\n", err.message),
        },
        OutputFormat::Text => format!("Error: {}\n", err.message),
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => format!("{}\n", s),
        Err(e) => format!("{}\n", ConverterError::internal(e.to_string()).to_json()),
    }
}
