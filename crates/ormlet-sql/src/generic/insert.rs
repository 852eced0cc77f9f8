use crate::{delim::Comma, Translator};

use ormlet_core::stmt::{DmlKind, Insert};

/// `INSERT INTO t(c1, c2) VALUES(e1, e2)`, columns in binding order.
///
/// An insert binding no column renders `DEFAULT VALUES`.
pub fn render_insert<T: Translator + ?Sized>(translator: &T, insert: &Insert) -> String {
    let table = translator.table_name(&insert.table);

    let sql = if insert.values.is_empty() {
        format!("INSERT INTO {table} DEFAULT VALUES")
    } else {
        let mut columns = Vec::with_capacity(insert.values.len());
        let mut values = Vec::with_capacity(insert.values.len());

        for (column, expr) in &insert.values {
            columns.push(translator.column_name(column));
            values.push(translator.translate_expression(DmlKind::Insert, expr));
        }

        format!(
            "INSERT INTO {table}({}) VALUES({})",
            Comma(&columns[..]),
            Comma(&values[..])
        )
    };

    tracing::trace!(sql = %sql, "rendered insert");
    sql
}
