//! Measurement domains

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four independent unit systems.
///
/// Declaration order is the detection priority: when an alias exists in
/// more than one domain ("m" is both minutes and meters), the earlier
/// domain wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Time,
    Weight,
    Length,
    Baking,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown conversion type: {0}")]
pub struct DomainParseError(pub String);

impl Domain {
    /// All domains in detection priority order
    pub const ALL: [Domain; 4] = [Domain::Time, Domain::Weight, Domain::Length, Domain::Baking];

    /// Lowercase name used in messages ("time", "weight", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Time => "time",
            Domain::Weight => "weight",
            Domain::Length => "length",
            Domain::Baking => "baking",
        }
    }

    /// Single-letter shorthand accepted on the command line
    pub fn short(&self) -> &'static str {
        match self {
            Domain::Time => "t",
            Domain::Weight => "w",
            Domain::Length => "l",
            Domain::Baking => "b",
        }
    }

    /// Reference unit with scale factor 1
    pub fn base_unit(&self) -> &'static str {
        match self {
            Domain::Time => "seconds",
            Domain::Weight => "grams",
            Domain::Length => "meters",
            Domain::Baking => "milliliters",
        }
    }

    /// Parse a conversion type token ("time", "t", "weight", "w", ...).
    ///
    /// Matching is exact: "Time" is not a type token.
    pub fn from_token(token: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|d| d.name() == token || d.short() == token)
    }
}

impl FromStr for Domain {
    type Err = DomainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::from_token(s).ok_or_else(|| DomainParseError(s.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
