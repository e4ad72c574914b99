//! Parameterized SQL rendering for predicates and sort orders.
//!
//! Literal values never land in the SQL text: each becomes a `?`
//! placeholder with the value collected out-of-band, and every referenced
//! field is checked against an allow list before it is quoted into the
//! statement.

mod render;

pub use render::{predicate_to_sql, sort_orders_to_sql};
