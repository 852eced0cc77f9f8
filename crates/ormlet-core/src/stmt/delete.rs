use super::{Expr, Parameters, Value};
use crate::schema::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete rows from
    pub table: Table,

    /// Optional `WHERE` condition
    pub filter: Option<Expr>,

    /// Values for the named parameters referenced by the statement
    pub parameters: Parameters,
}

impl Delete {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            filter: None,
            parameters: Parameters::new(),
        }
    }

    pub fn filter(&mut self, expr: Expr) -> &mut Self {
        self.filter = Some(expr);
        self
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }
}
