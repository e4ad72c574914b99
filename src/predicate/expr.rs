//! Predicate tree and its encoding.

use serde::{Deserialize, Serialize};

use crate::escape::escape;
use crate::value::Value;

/// A filter condition over named fields.
///
/// Variants map one-to-one onto the textual grammar; `Display` produces
/// the encoded token. Construction never validates field names or value
/// kinds, so every constructor is total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Negation: `not(p)`.
    Not(Box<Predicate>),
    /// Conjunction: `and(p1,p2,...)`. Zero or one operand is legal.
    And(Vec<Predicate>),
    /// Disjunction: `or(p1,p2,...)`. Zero or one operand is legal.
    Or(Vec<Predicate>),
    /// Membership: `eq(field,v1,...)`, or `eq(field)` for no values.
    Eq {
        /// Field under test.
        field: String,
        /// Accepted values; empty means "field is empty or absent".
        values: Vec<Value>,
    },
    /// Strictly less than: `lt(field,v)`.
    Lt {
        /// Field under test.
        field: String,
        /// Exclusive upper bound.
        value: Value,
    },
    /// Less than or equal: `le(field,v)`.
    Le {
        /// Field under test.
        field: String,
        /// Inclusive upper bound.
        value: Value,
    },
    /// Strictly greater than: `gt(field,v)`.
    Gt {
        /// Field under test.
        field: String,
        /// Exclusive lower bound.
        value: Value,
    },
    /// Greater than or equal: `ge(field,v)`.
    Ge {
        /// Field under test.
        field: String,
        /// Inclusive lower bound.
        value: Value,
    },
    /// Full-text search: `fts(field,$query)`.
    Fts {
        /// Field to search.
        field: String,
        /// Raw query text, escaped on rendering.
        query: String,
    },
}

impl Predicate {
    /// Negate this predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Conjunction of the given predicates, in order.
    pub fn and(operands: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::And(operands.into_iter().collect())
    }

    /// Disjunction of the given predicates, in order.
    pub fn or(operands: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::Or(operands.into_iter().collect())
    }

    /// Field equals any of the given values.
    ///
    /// An empty value set is a legal "field is empty or absent" predicate,
    /// not an error.
    pub fn eq(field: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        Predicate::Eq {
            field: field.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Field strictly less than the value.
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Lt {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field less than or equal to the value.
    pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Le {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field strictly greater than the value.
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Gt {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field greater than or equal to the value.
    pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Ge {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Full-text search over the field with the given query text.
    pub fn fts(field: impl Into<String>, query: impl Into<String>) -> Self {
        Predicate::Fts {
            field: field.into(),
            query: query.into(),
        }
    }

    /// All fields referenced by this predicate, deduplicated, in
    /// first-mention order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, fields: &mut Vec<&'a str>) {
        match self {
            Predicate::Not(operand) => operand.collect_fields(fields),
            Predicate::And(operands) | Predicate::Or(operands) => {
                for operand in operands {
                    operand.collect_fields(fields);
                }
            }
            Predicate::Eq { field, .. }
            | Predicate::Lt { field, .. }
            | Predicate::Le { field, .. }
            | Predicate::Gt { field, .. }
            | Predicate::Ge { field, .. }
            | Predicate::Fts { field, .. } => {
                if !fields.contains(&field.as_str()) {
                    fields.push(field);
                }
            }
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Not(operand) => write!(f, "not({})", operand),
            Predicate::And(operands) => write_list(f, "and", operands),
            Predicate::Or(operands) => write_list(f, "or", operands),
            Predicate::Eq { field, values } => {
                write!(f, "eq({}", escape(field))?;
                for value in values {
                    write!(f, ",{}", value)?;
                }
                write!(f, ")")
            }
            Predicate::Lt { field, value } => write!(f, "lt({},{})", escape(field), value),
            Predicate::Le { field, value } => write!(f, "le({},{})", escape(field), value),
            Predicate::Gt { field, value } => write!(f, "gt({},{})", escape(field), value),
            Predicate::Ge { field, value } => write!(f, "ge({},{})", escape(field), value),
            Predicate::Fts { field, query } => {
                write!(f, "fts({},${})", escape(field), escape(query))
            }
        }
    }
}

fn write_list(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    operands: &[Predicate],
) -> std::fmt::Result {
    write!(f, "{}(", name)?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", operand)?;
    }
    write!(f, ")")
}

impl std::ops::BitAnd for Predicate {
    type Output = Predicate;

    /// `a & b` builds a conjunction; a left-side conjunction absorbs the
    /// new operand, so `a & b & c` encodes as `and(a,b,c)`.
    fn bitand(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::And(mut operands) => {
                operands.push(rhs);
                Predicate::And(operands)
            }
            lhs => Predicate::And(vec![lhs, rhs]),
        }
    }
}

impl std::ops::BitOr for Predicate {
    type Output = Predicate;

    /// `a | b` builds a disjunction; a left-side disjunction absorbs the
    /// new operand, so `a | b | c` encodes as `or(a,b,c)`.
    fn bitor(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut operands) => {
                operands.push(rhs);
                Predicate::Or(operands)
            }
            lhs => Predicate::Or(vec![lhs, rhs]),
        }
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}
