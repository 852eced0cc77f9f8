use crate::{delim::Comma, Translator};

use ormlet_core::{
    schema::Column,
    stmt::{DmlKind, Expr, Update},
};

use indexmap::IndexMap;

/// The steps of update rendering.
///
/// [`render_update`] drives a processor through `from`, `column` and
/// `filter`, then asks it to `build` the statement. A dialect customizes the
/// update by wrapping [`UpdateBuilder`] and replacing individual steps.
pub trait UpdateProcessor {
    /// Records the target table.
    fn from(&mut self, update: &Update);

    /// Records the `SET` assignments.
    fn column(&mut self, values: &IndexMap<Column, Expr>);

    /// Records the optional `WHERE` condition.
    fn filter(&mut self, filter: Option<&Expr>);

    fn build(&self) -> String;
}

/// Runs `processor` over `update`.
pub fn render_update<P: UpdateProcessor + ?Sized>(processor: &mut P, update: &Update) -> String {
    processor.from(update);
    processor.column(&update.values);
    processor.filter(update.filter.as_ref());

    let sql = processor.build();
    tracing::trace!(sql = %sql, "rendered update");
    sql
}

/// Generic `UPDATE t SET c1 = e1, c2 = e2 [WHERE ...]` builder.
#[derive(Debug)]
pub struct UpdateBuilder<'a, T: ?Sized> {
    translator: &'a T,
    table: String,
    assignments: Vec<String>,
    filter: Option<String>,
}

impl<'a, T: Translator + ?Sized> UpdateBuilder<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self {
            translator,
            table: String::new(),
            assignments: vec![],
            filter: None,
        }
    }

    /// Appends a single `column = expr` assignment.
    pub fn assign(&mut self, column: &Column, expr: &Expr) {
        let assignment = format!(
            "{} = {}",
            self.translator.column_name(column),
            self.translator.translate_expression(DmlKind::Update, expr)
        );
        self.assignments.push(assignment);
    }
}

impl<T: Translator + ?Sized> UpdateProcessor for UpdateBuilder<'_, T> {
    fn from(&mut self, update: &Update) {
        self.table = self.translator.table_name(&update.table);
    }

    fn column(&mut self, values: &IndexMap<Column, Expr>) {
        for (column, expr) in values {
            self.assign(column, expr);
        }
    }

    fn filter(&mut self, filter: Option<&Expr>) {
        self.filter = filter.map(|filter| {
            self.translator
                .translate_expression(DmlKind::Update, filter)
        });
    }

    /// # Panics
    ///
    /// Panics if no column was assigned: `SET` with nothing to set is not a
    /// statement.
    fn build(&self) -> String {
        assert!(
            !self.assignments.is_empty(),
            "update of `{}` assigns no writable column",
            self.table
        );

        let mut sql = format!("UPDATE {} SET {}", self.table, Comma(&self.assignments[..]));

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }

        sql
    }
}
