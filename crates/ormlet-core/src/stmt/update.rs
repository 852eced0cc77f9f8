use super::{Expr, Parameters, Value};
use crate::schema::{Column, Table};

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table being updated
    pub table: Table,

    /// `column = expr` assignments, rendered in the given order
    pub values: IndexMap<Column, Expr>,

    /// Optional `WHERE` condition
    pub filter: Option<Expr>,

    /// Values for the named parameters referenced by the statement
    pub parameters: Parameters,
}

impl Update {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            values: IndexMap::new(),
            filter: None,
            parameters: Parameters::new(),
        }
    }

    pub fn set(&mut self, column: &Column, expr: impl Into<Expr>) -> &mut Self {
        self.values.insert(column.clone(), expr.into());
        self
    }

    /// Assigns `value` to `column` through a parameter named after the column.
    pub fn set_value(&mut self, column: &Column, value: impl Into<Value>) -> &mut Self {
        self.parameters.insert(column.name.clone(), value.into());
        self.set(column, Expr::param(column.name.clone()))
    }

    pub fn filter(&mut self, expr: Expr) -> &mut Self {
        self.filter = Some(expr);
        self
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }
}
