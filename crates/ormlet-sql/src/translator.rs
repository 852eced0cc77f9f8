use crate::{generic, AutoKeyStrategy, UpdateBuilder};

use ormlet_core::{
    schema::{Column, Table},
    stmt::{Delete, DmlKind, Expr, Insert, Query, Update},
};

/// Renders statement descriptors as SQL for one database dialect.
///
/// Every method has a default implementation producing the generic ANSI
/// rendering. The defaults delegate to the functions in [`generic`], passing
/// `self` along, so a dialect only overrides the steps that differ and every
/// other step still picks up its overrides. An overriding method may call the
/// matching [`generic`] function and adjust its output.
///
/// Translators hold configuration only. Rendering mutates nothing but the
/// descriptor passed in, so a translator can be shared between threads.
pub trait Translator: Send + Sync {
    /// Text of the bind placeholder for the parameter at `index` (zero based)
    /// named `name`.
    fn placeholder(&self, index: usize, name: &str) -> String {
        generic::placeholder(index, name)
    }

    /// How the database produces auto-generated keys.
    fn auto_key_strategy(&self) -> AutoKeyStrategy {
        AutoKeyStrategy::None
    }

    fn render_insert(&self, insert: &Insert) -> String {
        generic::render_insert(self, insert)
    }

    /// Renders `query`, pagination included.
    ///
    /// Pagination binds its limit and offset as parameters on `query`.
    fn render_query(&self, query: &mut Query) -> String {
        generic::render_query(self, query)
    }

    fn render_update(&self, update: &Update) -> String {
        generic::render_update(&mut UpdateBuilder::new(self), update)
    }

    fn render_delete(&self, delete: &Delete) -> String {
        generic::render_delete(self, delete)
    }

    /// Query returning the next value of the sequence backing `column`.
    fn auto_number_query(&self, column: &Column) -> String {
        generic::auto_number_query(self, column)
    }

    /// Appends the pagination clause for `query` to `sql`.
    fn paginate(&self, query: &mut Query, sql: String) -> String {
        generic::paginate(query, sql)
    }

    fn translate_expression(&self, kind: DmlKind, expr: &Expr) -> String {
        generic::translate_expression(self, kind, expr)
    }

    fn table_name(&self, table: &Table) -> String {
        table.name.clone()
    }

    fn column_name(&self, column: &Column) -> String {
        column.name.clone()
    }

    /// Alias given to the projected expression at `position`.
    fn column_alias(&self, expr: &Expr, position: usize) -> String {
        generic::column_alias(expr, position)
    }

    /// When true, null key values are left out of key criteria instead of
    /// being matched with `IS NULL`.
    fn ignore_null_keys(&self) -> bool {
        false
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn placeholder(&self, index: usize, name: &str) -> String {
        (**self).placeholder(index, name)
    }

    fn auto_key_strategy(&self) -> AutoKeyStrategy {
        (**self).auto_key_strategy()
    }

    fn render_insert(&self, insert: &Insert) -> String {
        (**self).render_insert(insert)
    }

    fn render_query(&self, query: &mut Query) -> String {
        (**self).render_query(query)
    }

    fn render_update(&self, update: &Update) -> String {
        (**self).render_update(update)
    }

    fn render_delete(&self, delete: &Delete) -> String {
        (**self).render_delete(delete)
    }

    fn auto_number_query(&self, column: &Column) -> String {
        (**self).auto_number_query(column)
    }

    fn paginate(&self, query: &mut Query, sql: String) -> String {
        (**self).paginate(query, sql)
    }

    fn translate_expression(&self, kind: DmlKind, expr: &Expr) -> String {
        (**self).translate_expression(kind, expr)
    }

    fn table_name(&self, table: &Table) -> String {
        (**self).table_name(table)
    }

    fn column_name(&self, column: &Column) -> String {
        (**self).column_name(column)
    }

    fn column_alias(&self, expr: &Expr, position: usize) -> String {
        (**self).column_alias(expr, position)
    }

    fn ignore_null_keys(&self) -> bool {
        (**self).ignore_null_keys()
    }
}
