use super::{Expr, Parameters, Value};
use crate::schema::{Column, Table};

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table receiving the row
    pub table: Table,

    /// Column bindings, rendered in insertion order
    pub values: IndexMap<Column, Expr>,

    /// True when the caller supplied the key value. When false the database
    /// is expected to generate it.
    pub has_key_value: bool,

    /// Values for the named parameters referenced by `values`
    pub parameters: Parameters,
}

impl Insert {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            values: IndexMap::new(),
            has_key_value: false,
            parameters: Parameters::new(),
        }
    }

    /// Binds `column` to an arbitrary expression.
    pub fn set(&mut self, column: &Column, expr: impl Into<Expr>) -> &mut Self {
        self.values.insert(column.clone(), expr.into());
        self
    }

    /// Binds `column` to a parameter named after the column carrying `value`.
    ///
    /// A non-null value for a key column marks the key as supplied.
    pub fn set_value(&mut self, column: &Column, value: impl Into<Value>) -> &mut Self {
        let value = value.into();

        if column.is_key() && !value.is_null() {
            self.has_key_value = true;
        }

        self.parameters.insert(column.name.clone(), value);
        self.set(column, Expr::param(column.name.clone()))
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }
}
