//! Loosely validated filter input as received from callers.

use serde::{Deserialize, Serialize};

/// Caller-supplied paging and sorting hints.
///
/// Every field is optional and none are validated here; numeric fields are
/// signed so that negative input survives deserialisation and can be
/// defaulted by [`crate::normalize`] instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFilter {
    /// Zero-based page index.
    pub page: Option<i64>,
    /// Requested number of items per page.
    pub page_size: Option<i64>,
    /// Field to sort by.
    pub sort_field: Option<String>,
    /// `ASC` or `DESC`, in any letter case.
    pub sort_direction: Option<String>,
}
