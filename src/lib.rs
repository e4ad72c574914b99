//! WREN: Web Request Expression Notation
//!
//! Filter predicates and sort orders encoded as compact URL-safe values
//! for query-string parameters, plus parameterized SQL rendering for the
//! receiving side.

pub mod error;
pub mod escape;
pub mod predicate;
pub mod sort;
pub mod sql;
pub mod value;

pub use error::{Error, Result};
pub use escape::escape;
pub use predicate::Predicate;
pub use sort::{sort_spec, SortOrder};
pub use sql::{predicate_to_sql, sort_orders_to_sql};
pub use value::Value;
