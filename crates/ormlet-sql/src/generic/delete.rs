use crate::Translator;

use ormlet_core::stmt::{Delete, DmlKind};

/// `DELETE FROM t [WHERE ...]`
pub fn render_delete<T: Translator + ?Sized>(translator: &T, delete: &Delete) -> String {
    let mut sql = format!("DELETE FROM {}", translator.table_name(&delete.table));

    if let Some(filter) = &delete.filter {
        sql.push_str(" WHERE ");
        sql.push_str(&translator.translate_expression(DmlKind::Delete, filter));
    }

    tracing::trace!(sql = %sql, "rendered delete");
    sql
}
