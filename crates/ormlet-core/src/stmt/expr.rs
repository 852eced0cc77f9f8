use super::{BinaryOp, ExprFunc};
use crate::schema::Column;

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column of the statement's table, or of a joined table.
    Column(Column),

    /// A named bind parameter, rendered as `:name`.
    Param(String),

    /// The `NULL` literal
    Null,

    /// `*`
    Asterisk,

    /// SQL text emitted verbatim.
    Raw(String),

    BinaryOp {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    And(Vec<Expr>),

    Or(Vec<Expr>),

    Not(Box<Expr>),

    IsNull {
        expr: Box<Expr>,
        negate: bool,
    },

    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
    },

    Func(ExprFunc),

    /// `DISTINCT <expr>`, used inside aggregate calls.
    Distinct(Box<Expr>),
}

impl Expr {
    pub fn column(column: &Column) -> Self {
        Self::Column(column.clone())
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Self {
        Self::BinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn like(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Like, rhs)
    }

    /// Conjunction of `operands`. A single operand is returned unwrapped.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut operands: Vec<_> = operands.into_iter().collect();

        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Self::And(operands)
        }
    }

    /// Disjunction of `operands`. A single operand is returned unwrapped.
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut operands: Vec<_> = operands.into_iter().collect();

        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Self::Or(operands)
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: impl Into<Expr>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    pub fn is_null(expr: impl Into<Expr>) -> Self {
        Self::IsNull {
            expr: Box::new(expr.into()),
            negate: false,
        }
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Self {
        Self::IsNull {
            expr: Box::new(expr.into()),
            negate: true,
        }
    }

    pub fn in_list(expr: impl Into<Expr>, list: impl IntoIterator<Item = Expr>) -> Self {
        Self::InList {
            expr: Box::new(expr.into()),
            list: list.into_iter().collect(),
        }
    }

    pub fn count(arg: impl Into<Expr>) -> Self {
        ExprFunc::new("COUNT", vec![arg.into()]).into()
    }

    pub fn distinct(expr: impl Into<Expr>) -> Self {
        Self::Distinct(Box::new(expr.into()))
    }
}

impl From<&Column> for Expr {
    fn from(value: &Column) -> Self {
        Self::column(value)
    }
}

impl From<Column> for Expr {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}
