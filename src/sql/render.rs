//! SQL rendering over the predicate tree.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::predicate::Predicate;
use crate::sort::SortOrder;
use crate::value::Value;

/// Render a predicate as a parameterized SQL condition.
///
/// Returns the SQL text and the literal values in placeholder order.
/// Every field referenced by the predicate must appear in
/// `allowed_fields`, otherwise rendering stops with
/// [`Error::UnauthorizedField`].
pub fn predicate_to_sql(
    predicate: &Predicate,
    allowed_fields: &[&str],
) -> Result<(String, Vec<Value>)> {
    let mut b = SqlBuilder::new(allowed_fields);
    b.render_predicate(predicate)?;
    Ok((b.sql, b.params))
}

/// Render sort orders as the body of a SQL ORDER BY clause.
///
/// Fields are comma-separated and suffixed with ` DESC` when descending.
/// The same field allow list applies as for [`predicate_to_sql`].
pub fn sort_orders_to_sql(orders: &[SortOrder], allowed_fields: &[&str]) -> Result<String> {
    let mut b = SqlBuilder::new(allowed_fields);

    for (i, order) in orders.iter().enumerate() {
        if i > 0 {
            b.sql.push(',');
        }

        b.push_identifier(&order.field)?;

        if !order.ascending {
            b.sql.push_str(" DESC");
        }
    }

    Ok(b.sql)
}

struct SqlBuilder<'a> {
    allowed_fields: HashSet<&'a str>,
    sql: String,
    params: Vec<Value>,
}

impl<'a> SqlBuilder<'a> {
    fn new(allowed_fields: &[&'a str]) -> Self {
        Self {
            allowed_fields: allowed_fields.iter().copied().collect(),
            sql: String::with_capacity(64),
            params: Vec::new(),
        }
    }

    /// Quote a field into the SQL text, doubling embedded backticks.
    fn push_identifier(&mut self, field: &str) -> Result<()> {
        if !self.allowed_fields.contains(field) {
            return Err(Error::UnauthorizedField(field.to_string()));
        }

        self.sql.push('`');
        for c in field.chars() {
            if c == '`' {
                self.sql.push('`');
            }
            self.sql.push(c);
        }
        self.sql.push('`');
        Ok(())
    }

    fn push_param(&mut self, value: Value) {
        self.sql.push('?');
        self.params.push(value);
    }

    fn render_predicate(&mut self, predicate: &Predicate) -> Result<()> {
        match predicate {
            Predicate::Not(operand) => {
                self.sql.push_str("(NOT ");
                self.render_predicate(operand)?;
                self.sql.push(')');
            }
            Predicate::And(operands) => self.render_group(operands, " AND ", "true")?,
            Predicate::Or(operands) => self.render_group(operands, " OR ", "false")?,
            Predicate::Eq { field, values } => match values.len() {
                // No accepted value can ever match.
                0 => self.sql.push_str("false"),
                1 => {
                    self.push_identifier(field)?;
                    self.sql.push('=');
                    self.push_param(values[0].clone());
                }
                _ => {
                    self.push_identifier(field)?;
                    self.sql.push_str(" IN (");
                    for (i, value) in values.iter().enumerate() {
                        if i > 0 {
                            self.sql.push(',');
                        }
                        self.push_param(value.clone());
                    }
                    self.sql.push(')');
                }
            },
            Predicate::Lt { field, value } => self.render_comparison(field, "<", value)?,
            Predicate::Le { field, value } => self.render_comparison(field, "<=", value)?,
            Predicate::Gt { field, value } => self.render_comparison(field, ">", value)?,
            Predicate::Ge { field, value } => self.render_comparison(field, ">=", value)?,
            Predicate::Fts { field, query } => {
                self.sql.push_str("MATCH (");
                self.push_identifier(field)?;
                self.sql.push_str(") AGAINST (");
                self.push_param(Value::text(query.clone()));
                self.sql.push(')');
            }
        }

        Ok(())
    }

    fn render_group(
        &mut self,
        operands: &[Predicate],
        separator: &str,
        empty_value: &str,
    ) -> Result<()> {
        self.sql.push('(');
        if operands.is_empty() {
            self.sql.push_str(empty_value);
        } else {
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    self.sql.push_str(separator);
                }
                self.render_predicate(operand)?;
            }
        }
        self.sql.push(')');
        Ok(())
    }

    fn render_comparison(&mut self, field: &str, operator: &str, value: &Value) -> Result<()> {
        self.push_identifier(field)?;
        self.sql.push_str(operator);
        self.push_param(value.clone());
        Ok(())
    }
}
