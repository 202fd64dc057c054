//! Canonical query specification and the normaliser producing it.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::{RawFilter, SortDirection};

/// Page size used when the caller omits one or supplies a non-positive value.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(19);

/// Sort field used when the caller omits one or supplies a blank value.
pub const DEFAULT_SORT_FIELD: &str = "dueDate";

/// Fully populated paging and sorting instructions for a store query.
///
/// ## Invariants
/// - `page_size` is strictly positive.
/// - `sort_field` is non-blank and carries no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    page: u32,
    page_size: NonZeroU32,
    sort_field: String,
    sort_direction: SortDirection,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_owned(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl QuerySpec {
    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page; never zero.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size.get()
    }

    /// Field the store should sort by.
    #[must_use]
    pub fn sort_field(&self) -> &str {
        self.sort_field.as_str()
    }

    /// Ordering applied to [`Self::sort_field`].
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Number of rows to skip before the requested page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size.get())
    }

    /// Maximum number of rows to return.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size.get())
    }
}

/// Translate optional caller input into a fully populated [`QuerySpec`].
///
/// Out-of-range values are replaced by defaults rather than rejected, and an
/// unrecognised sort direction leaves the default direction in place.
#[must_use]
pub fn normalize(filter: Option<&RawFilter>) -> QuerySpec {
    let mut spec = QuerySpec::default();
    let Some(raw_filter) = filter else {
        return spec;
    };

    if let Some(page) = raw_filter.page.and_then(|raw| u32::try_from(raw).ok()) {
        spec.page = page;
    }

    if let Some(page_size) = raw_filter
        .page_size
        .and_then(|raw| u32::try_from(raw).ok())
        .and_then(NonZeroU32::new)
    {
        spec.page_size = page_size;
    }

    if let Some(sort_field) = raw_filter
        .sort_field
        .as_deref()
        .map(str::trim)
        .filter(|field| !field.is_empty())
    {
        spec.sort_field = sort_field.to_owned();
    }

    if let Some(direction) = raw_filter
        .sort_direction
        .as_deref()
        .and_then(|raw| raw.parse::<SortDirection>().ok())
    {
        spec.sort_direction = direction;
    }

    spec
}
