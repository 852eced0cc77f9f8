//! The generic ANSI rendering.
//!
//! Each function receives the outermost translator and routes every
//! dialect-sensitive step (identifiers, expressions, placeholders,
//! pagination) back through it.

mod delete;
pub use delete::render_delete;

mod expr;
pub use expr::{column_alias, translate_expression};

mod insert;
pub use insert::render_insert;

mod query;
pub use query::{paginate, render_query};

mod update;
pub use update::{render_update, UpdateBuilder, UpdateProcessor};

use crate::{Options, Translator};

use ormlet_core::schema::{Column, Table};

/// Translator producing the generic ANSI rendering.
///
/// Dialects embed it to carry their configuration and fall back to it for
/// anything they do not override.
#[derive(Debug, Clone, Default)]
pub struct GenericTranslator {
    ignore_null_keys: bool,
}

impl GenericTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &Options) -> Self {
        Self {
            ignore_null_keys: options.ignore_null_keys,
        }
    }
}

impl Translator for GenericTranslator {
    fn ignore_null_keys(&self) -> bool {
        self.ignore_null_keys
    }
}

/// Named marker `:name`, resolved later by [`bind`](crate::bind).
pub fn placeholder(_index: usize, name: &str) -> String {
    format!(":{name}")
}

pub fn auto_number_query<T: Translator + ?Sized>(translator: &T, column: &Column) -> String {
    format!(
        "SELECT NEXT VALUE FOR {}_{}_seq",
        translator.table_name(&Table::new(column.table.as_str())),
        translator.column_name(column)
    )
}
