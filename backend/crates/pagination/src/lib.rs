//! Defaulting normalisation for paged, sorted read queries.
//!
//! Read-path handlers accept loosely validated filter input (query strings,
//! JSON bodies) and need a fully populated query before touching a data
//! store. This crate owns that translation. Normalisation never fails:
//! missing, negative, zero, blank, or unrecognised values fall back to
//! defaults instead of producing an error.
//!
//! # Example
//!
//! ```
//! use pagination::{RawFilter, SortDirection, normalize};
//!
//! let filter = RawFilter {
//!     page: Some(-1),
//!     page_size: Some(0),
//!     sort_direction: Some("sideways".to_owned()),
//!     ..RawFilter::default()
//! };
//! let spec = normalize(Some(&filter));
//!
//! assert_eq!(spec.page(), 0);
//! assert_eq!(spec.page_size(), 20);
//! assert_eq!(spec.sort_field(), "dueDate");
//! assert_eq!(spec.sort_direction(), SortDirection::Asc);
//! ```

mod direction;
mod filter;
mod spec;

pub use direction::{SortDirection, SortDirectionParseError};
pub use filter::RawFilter;
pub use spec::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, QuerySpec, normalize};

#[cfg(test)]
mod tests;
