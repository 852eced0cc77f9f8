use super::{Expr, Join, JoinKind, OrderBy, Parameters, Value};
use crate::schema::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Main table, aliased by its `alias`
    pub table: Table,

    /// Projected expressions. Empty selects every column of `table`.
    pub columns: Vec<Expr>,

    pub distinct: bool,

    pub joins: Vec<Join>,

    /// Optional `WHERE` condition
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    /// Optional `HAVING` condition, only rendered with a `GROUP BY`
    pub having: Option<Expr>,

    pub order_by: Vec<OrderBy>,

    /// Maximum number of rows to return; zero means no limit.
    pub limit: u64,

    /// Number of rows to skip; only honored together with a limit.
    pub skip: u64,

    /// Values for the named parameters referenced by the statement
    pub parameters: Parameters,
}

impl Query {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            columns: vec![],
            distinct: false,
            joins: vec![],
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: 0,
            skip: 0,
            parameters: Parameters::new(),
        }
    }

    pub fn column(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.columns.push(expr.into());
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    pub fn inner_join(&mut self, table: Table, on: Expr) -> &mut Self {
        self.joins.push(Join {
            kind: JoinKind::Inner,
            table,
            on,
        });
        self
    }

    pub fn left_join(&mut self, table: Table, on: Expr) -> &mut Self {
        self.joins.push(Join {
            kind: JoinKind::Left,
            table,
            on,
        });
        self
    }

    pub fn filter(&mut self, expr: Expr) -> &mut Self {
        self.filter = Some(expr);
        self
    }

    pub fn group_by(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(&mut self, expr: Expr) -> &mut Self {
        self.having = Some(expr);
        self
    }

    pub fn order_by(&mut self, order_by: OrderBy) -> &mut Self {
        self.order_by.push(order_by);
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn skip(&mut self, skip: u64) -> &mut Self {
        self.skip = skip;
        self
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }
}
