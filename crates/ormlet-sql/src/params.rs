use crate::Translator;

use ormlet_core::{
    stmt::{Parameters, Value},
    Error, Result,
};

/// SQL ready for execution: dialect placeholders plus the values to bind, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub sql: String,

    /// Parameter name behind each placeholder
    pub names: Vec<String>,

    pub values: Vec<Value>,
}

/// Replaces the `:name` markers of rendered SQL with the translator's
/// placeholders and collects the matching values from `parameters`.
///
/// Quoted literals and identifiers are copied verbatim, as are `::` casts. A
/// parameter referenced twice is bound twice.
pub fn bind<T: Translator + ?Sized>(
    translator: &T,
    sql: &str,
    parameters: &Parameters,
) -> Result<Bound> {
    let mut bound = Bound {
        sql: String::with_capacity(sql.len()),
        names: vec![],
        values: vec![],
    };

    let mut quote = None;
    let mut chars = sql.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            bound.sql.push(ch);
            continue;
        }

        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                bound.sql.push(ch);
            }
            ':' => match chars.peek().map(|&(_, next)| next) {
                Some(':') => {
                    chars.next();
                    bound.sql.push_str("::");
                }
                Some(next) if next.is_alphabetic() || next == '_' => {
                    let mut end = sql.len();

                    while let Some(&(i, next)) = chars.peek() {
                        if !(next.is_alphanumeric() || next == '_') {
                            end = i;
                            break;
                        }
                        chars.next();
                    }

                    let name = &sql[start + 1..end];
                    let Some(value) = parameters.get(name) else {
                        return Err(Error::unknown_parameter(name));
                    };

                    let placeholder = translator.placeholder(bound.names.len(), name);
                    bound.sql.push_str(&placeholder);
                    bound.names.push(name.to_string());
                    bound.values.push(value.clone());
                }
                _ => bound.sql.push(ch),
            },
            _ => bound.sql.push(ch),
        }
    }

    tracing::debug!(sql = %bound.sql, params = bound.values.len(), "bound statement");
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericTranslator, PostgresqlTranslator};

    use pretty_assertions::assert_eq;

    fn params(values: &[(&str, Value)]) -> Parameters {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn markers_become_positional() {
        let parameters = params(&[("name", "carl".into()), ("id", 7i64.into())]);

        let bound = bind(
            &PostgresqlTranslator::new(),
            "UPDATE users SET name = :name WHERE id = :id",
            &parameters,
        )
        .unwrap();

        assert_eq!(bound.sql, "UPDATE users SET name = $1 WHERE id = $2");
        assert_eq!(bound.names, ["name", "id"]);
        assert_eq!(bound.values, [Value::from("carl"), Value::I64(7)]);
    }

    #[test]
    fn literals_and_casts_are_left_alone() {
        let parameters = params(&[("id", 1i64.into())]);

        let bound = bind(
            &PostgresqlTranslator::new(),
            "SELECT ':not_a_param', \"a:b\", t0.id::text FROM t t0 WHERE t0.id = :id",
            &parameters,
        )
        .unwrap();

        assert_eq!(
            bound.sql,
            "SELECT ':not_a_param', \"a:b\", t0.id::text FROM t t0 WHERE t0.id = $1"
        );
        assert_eq!(bound.values.len(), 1);
    }

    #[test]
    fn repeated_marker_binds_twice() {
        let parameters = params(&[("v", 1i64.into())]);

        let bound = bind(&PostgresqlTranslator::new(), ":v + :v", &parameters).unwrap();
        assert_eq!(bound.sql, "$1 + $2");
        assert_eq!(bound.values, [Value::I64(1), Value::I64(1)]);
    }

    #[test]
    fn generic_keeps_named_markers() {
        let parameters = params(&[("id", 1i64.into())]);

        let bound = bind(&GenericTranslator::new(), "id = :id", &parameters).unwrap();
        assert_eq!(bound.sql, "id = :id");
        assert_eq!(bound.names, ["id"]);
    }

    #[test]
    fn unknown_parameter() {
        let err = bind(&GenericTranslator::new(), "id = :id", &Parameters::new()).unwrap_err();
        assert!(err.is_unknown_parameter());
        assert_eq!(err.to_string(), "no value bound for parameter `:id`");
    }
}
