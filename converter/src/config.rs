//! Environment configuration
//!
//! - `CONVERTER_INSTALL_DIR`: directory `--install` copies the binary into
//! - `CONVERTER_OUTPUT`: `json` to make JSON the default output
//! - `CONVERTER_LOG` (then `RUST_LOG`): tracing filter, default `warn`

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How results and errors are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub install_dir: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            install_dir: None,
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output = match get("CONVERTER_OUTPUT") {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            install_dir: get("CONVERTER_INSTALL_DIR").map(PathBuf::from),
            output,
            log_filter: get("CONVERTER_LOG")
                .or_else(|| get("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
