//! Structured errors reported to the user
//!
//! Engine failures are typed (`ConversionError` in converter-units). At the
//! edge they are flattened into a `ConverterError` carrying a stable code so
//! both the text and JSON outputs can report them.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const CROSS_DOMAIN: &str = "CROSS_DOMAIN";
    pub const UNKNOWN_DOMAIN: &str = "UNKNOWN_DOMAIN";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const USAGE: &str = "USAGE";
    pub const INSTALL_FAILED: &str = "INSTALL_FAILED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Structured error with a code, message and optional hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConverterError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_number(token: &str) -> Self {
        Self::new(
            codes::INVALID_NUMBER,
            format!("could not convert string to float: '{}'", token),
        )
        .with_suggestion("Pass the value as a plain number, e.g. 5.5")
    }

    pub fn usage(details: impl Into<String>) -> Self {
        Self::new(codes::USAGE, details).with_suggestion("Use -h for help")
    }

    pub fn install_failed(details: impl Into<String>) -> Self {
        Self::new(codes::INSTALL_FAILED, format!("Installation failed: {}", details.into()))
    }

    pub fn permission_denied(hint: impl Into<String>) -> Self {
        Self::new(codes::PERMISSION_DENIED, "Permission denied. Try running with sudo:")
            .with_suggestion(hint)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }

    /// Render as a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"code\":\"{}\",\"message\":\"{}\"}}", codes::INTERNAL, self.code)
        })
    }
}

impl std::fmt::Display for ConverterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConverterError {}
