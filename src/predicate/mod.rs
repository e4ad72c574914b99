//! Filter predicates and their query-string encoding.
//!
//! # Encoding Overview
//!
//! - **Combinators**: `not(p)`, `and(p1,p2,...)`, `or(p1,p2,...)`
//! - **Comparisons**: `eq(field,v1,...)`, `lt(field,v)`, `le(field,v)`,
//!   `gt(field,v)`, `ge(field,v)`
//! - **Full-text search**: `fts(field,$text)`
//! - **Literals**: `null`, `true`/`false`, bare numbers, `$`-prefixed
//!   escaped text, RFC 3339 date-times
//!
//! Field names and string literal text are percent-escaped everywhere, so
//! the encoded token is URL-safe as a query-string parameter value.

mod expr;

pub use expr::Predicate;
