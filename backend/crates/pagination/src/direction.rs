//! Sort direction parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordering applied to the sort field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Canonical upper-case token for the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names neither `ASC` nor `DESC`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised sort direction: {value:?}")]
pub struct SortDirectionParseError {
    /// The rejected input, as supplied.
    pub value: String,
}

impl FromStr for SortDirection {
    type Err = SortDirectionParseError;

    /// Parse a direction, ignoring surrounding whitespace and letter case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(SortDirectionParseError {
                value: raw.to_owned(),
            }),
        }
    }
}
