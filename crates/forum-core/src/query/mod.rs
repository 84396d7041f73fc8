//! Query vocabulary - the whitelisted inputs of the query shaper
//!
//! Sort keys and orders are the only request values that are ever rendered
//! into SQL as raw identifiers (the query language cannot parameterize
//! column or direction names), so they are modeled as closed enums here and
//! parsed permissively: anything outside the whitelist degrades to the
//! default instead of failing the read.

mod page;
mod sort;

pub use page::{Page, PageRequest};
pub use sort::{SortKey, SortOrder};
