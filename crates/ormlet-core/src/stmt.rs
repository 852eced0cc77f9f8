mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod dml_kind;
pub use dml_kind::DmlKind;

mod expr;
pub use expr::Expr;

mod expr_func;
pub use expr_func::ExprFunc;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod query;
pub use query::Query;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

use indexmap::IndexMap;

/// Named parameter values bound on a statement, in binding order.
pub type Parameters = IndexMap<String, Value>;

/// Parameter name used to bind a query's row limit.
pub const LIMIT_PARAM: &str = "_limit";

/// Parameter name used to bind a query's row offset.
pub const OFFSET_PARAM: &str = "_offset";
