use crate::{delim::Delimited, Translator};

use ormlet_core::stmt::{DmlKind, Expr};

/// Renders `expr` for a statement of the given kind.
///
/// Columns are qualified by their table alias inside queries and bare inside
/// write statements. Disjunctions are parenthesized so they nest safely in a
/// conjunction.
pub fn translate_expression<T: Translator + ?Sized>(
    translator: &T,
    kind: DmlKind,
    expr: &Expr,
) -> String {
    let render = |expr: &Expr| translator.translate_expression(kind, expr);
    let render_all = |exprs: &[Expr]| exprs.iter().map(render).collect::<Vec<_>>();

    match expr {
        Expr::Column(column) => {
            let name = translator.column_name(column);

            if kind.is_query() && !column.alias.is_empty() {
                format!("{}.{name}", column.alias)
            } else {
                name
            }
        }
        Expr::Param(name) => format!(":{name}"),
        Expr::Null => "NULL".to_string(),
        Expr::Asterisk => "*".to_string(),
        Expr::Raw(sql) => sql.clone(),
        Expr::BinaryOp { op, lhs, rhs } => {
            format!("{} {} {}", render(lhs), op.as_sql(), render(rhs))
        }
        Expr::And(operands) => Delimited(&render_all(operands)[..], " AND ").to_string(),
        Expr::Or(operands) => format!("({})", Delimited(&render_all(operands)[..], " OR ")),
        Expr::Not(expr) => format!("NOT ({})", render(expr)),
        Expr::IsNull { expr, negate } => {
            let op = if *negate { "IS NOT NULL" } else { "IS NULL" };
            format!("{} {op}", render(expr))
        }
        Expr::InList { expr, list } => {
            format!("{} IN ({})", render(expr), Delimited(&render_all(list)[..], ", "))
        }
        Expr::Func(func) => {
            format!("{}({})", func.name, Delimited(&render_all(&func.args)[..], ", "))
        }
        Expr::Distinct(expr) => format!("DISTINCT {}", render(expr)),
    }
}

pub fn column_alias(_expr: &Expr, position: usize) -> String {
    format!("col_{position}")
}
