use crate::Translator;

use ormlet_core::{
    schema::Column,
    stmt::{Expr, Parameters, Value},
};

/// Builds the conjunction matching a row by its key values.
///
/// Each key is compared with a parameter named `key_<column>`, which is
/// added to `parameters`. A null key value is matched with `IS NULL`, or left
/// out entirely when the translator ignores null keys. Returns `None` when no
/// criterion remains.
pub fn key_filter<T: Translator + ?Sized>(
    translator: &T,
    keys: impl IntoIterator<Item = (Column, Value)>,
    parameters: &mut Parameters,
) -> Option<Expr> {
    let mut operands = vec![];

    for (column, value) in keys {
        if value.is_null() {
            if !translator.ignore_null_keys() {
                operands.push(Expr::is_null(column));
            }
            continue;
        }

        let name = format!("key_{}", column.name);
        parameters.insert(name.clone(), value);
        operands.push(Expr::eq(column, Expr::param(name)));
    }

    if operands.is_empty() {
        None
    } else {
        Some(Expr::and(operands))
    }
}
