use crate::{
    generic::{self, UpdateBuilder, UpdateProcessor},
    AutoKeyStrategy, GenericTranslator, Options, Translator,
};

use ormlet_core::{
    schema::{Column, Table},
    stmt::{Expr, Insert, Query, Update, LIMIT_PARAM, OFFSET_PARAM},
};

use indexmap::IndexMap;

/// PostgreSQL dialect.
///
/// Positional `$n` placeholders, lower-cased identifiers, `LIMIT`/`OFFSET`
/// pagination, and generated keys returned by the insert itself.
#[derive(Debug, Clone, Default)]
pub struct PostgresqlTranslator {
    generic: GenericTranslator,
}

impl PostgresqlTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &Options) -> Self {
        Self {
            generic: GenericTranslator::with_options(options),
        }
    }
}

impl Translator for PostgresqlTranslator {
    fn placeholder(&self, index: usize, _name: &str) -> String {
        format!("${}", index + 1)
    }

    fn auto_key_strategy(&self) -> AutoKeyStrategy {
        AutoKeyStrategy::Returning
    }

    /// Appends `RETURNING <key>` when the database generates the key.
    ///
    /// # Panics
    ///
    /// When the key is generated and the table does not have exactly one key
    /// column.
    fn render_insert(&self, insert: &Insert) -> String {
        let mut sql = generic::render_insert(self, insert);

        if !insert.has_key_value {
            let key = insert.table.single_key_column();
            sql.push_str(" RETURNING ");
            sql.push_str(&self.column_name(key));
        }

        sql
    }

    fn render_update(&self, update: &Update) -> String {
        generic::render_update(&mut PgUpdateBuilder::new(self), update)
    }

    fn paginate(&self, query: &mut Query, mut sql: String) -> String {
        if query.limit > 0 {
            sql.push_str(&format!(" LIMIT :{LIMIT_PARAM}"));
            query.set_parameter(LIMIT_PARAM, query.limit);

            if query.skip > 0 {
                sql.push_str(&format!(" OFFSET :{OFFSET_PARAM}"));
                query.set_parameter(OFFSET_PARAM, query.skip);
            }
        }

        sql
    }

    fn table_name(&self, table: &Table) -> String {
        table.name.to_lowercase()
    }

    fn column_name(&self, column: &Column) -> String {
        column.name.to_lowercase()
    }

    fn ignore_null_keys(&self) -> bool {
        self.generic.ignore_null_keys()
    }
}

/// Update builder leaving computed columns out of the `SET` list.
#[derive(Debug)]
pub struct PgUpdateBuilder<'a, T: ?Sized> {
    inner: UpdateBuilder<'a, T>,
}

impl<'a, T: Translator + ?Sized> PgUpdateBuilder<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self {
            inner: UpdateBuilder::new(translator),
        }
    }
}

impl<T: Translator + ?Sized> UpdateProcessor for PgUpdateBuilder<'_, T> {
    fn from(&mut self, update: &Update) {
        self.inner.from(update);
    }

    fn column(&mut self, values: &IndexMap<Column, Expr>) {
        for (column, expr) in values {
            if column.is_virtual() {
                continue;
            }

            self.inner.assign(column, expr);
        }
    }

    fn filter(&mut self, filter: Option<&Expr>) {
        self.inner.filter(filter);
    }

    fn build(&self) -> String {
        self.inner.build()
    }
}
