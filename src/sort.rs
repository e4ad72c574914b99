//! Sort orders and the sort-spec encoding.

use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// A single ordering directive for one field.
///
/// Renders as the escaped field name, prefixed with `!` when descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field to order by.
    pub field: String,
    /// Ascending when true, descending when false.
    pub ascending: bool,
}

impl SortOrder {
    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.ascending {
            write!(f, "!")?;
        }
        write!(f, "{}", escape(&self.field))
    }
}

/// Encode a sequence of orders as a sort-spec token.
///
/// Order tokens are concatenated with no separator, so descending `rooms`
/// followed by ascending `price` yields `!roomsprice`.
pub fn sort_spec(orders: impl IntoIterator<Item = SortOrder>) -> String {
    orders.into_iter().map(|order| order.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_token() {
        assert_eq!(SortOrder::asc("price").to_string(), "price");
    }

    #[test]
    fn test_descending_token() {
        assert_eq!(SortOrder::desc("rooms").to_string(), "!rooms");
    }

    #[test]
    fn test_field_escaping() {
        assert_eq!(SortOrder::asc("unit price").to_string(), "unit%20price");
    }

    #[test]
    fn test_spec_concatenates_without_separator() {
        let spec = sort_spec([SortOrder::desc("rooms"), SortOrder::asc("price")]);
        assert_eq!(spec, "!roomsprice");
    }

    #[test]
    fn test_spec_single_order() {
        assert_eq!(sort_spec([SortOrder::asc("name")]), "name");
    }

    #[test]
    fn test_spec_empty() {
        assert_eq!(sort_spec([]), "");
    }

    #[test]
    fn test_spec_from_vec() {
        let orders = vec![SortOrder::asc("a"), SortOrder::desc("b")];
        assert_eq!(sort_spec(orders), "a!b");
    }
}
