use crate::{delim::Comma, Translator};

use ormlet_core::{
    schema::Table,
    stmt::{Direction, DmlKind, Expr, JoinKind, Query, LIMIT_PARAM, OFFSET_PARAM},
};

/// `SELECT [DISTINCT] cols FROM t alias [joins] [WHERE] [GROUP BY] [HAVING]
/// [ORDER BY]`, followed by the translator's pagination.
///
/// With no projected column, every column of the main table is selected.
pub fn render_query<T: Translator + ?Sized>(translator: &T, query: &mut Query) -> String {
    let render = |expr: &Expr| translator.translate_expression(DmlKind::Query, expr);

    let columns: Vec<String> = if query.columns.is_empty() {
        if query.table.columns.is_empty() {
            vec!["*".to_string()]
        } else {
            query
                .table
                .columns
                .iter()
                .map(|column| render(&Expr::column(column)))
                .collect()
        }
    } else {
        query
            .columns
            .iter()
            .enumerate()
            .map(|(position, column)| match column {
                Expr::Column(_) | Expr::Asterisk => render(column),
                _ => format!(
                    "{} AS {}",
                    render(column),
                    translator.column_alias(column, position)
                ),
            })
            .collect()
    };

    let mut sql = String::from("SELECT ");

    if query.distinct {
        sql.push_str("DISTINCT ");
    }

    sql.push_str(&Comma(&columns[..]).to_string());
    sql.push_str(" FROM ");
    sql.push_str(&table_ref(translator, &query.table));

    for join in &query.joins {
        let kind = match join.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT OUTER JOIN",
        };
        let table = table_ref(translator, &join.table);
        sql.push_str(&format!(" {kind} {table} ON {}", render(&join.on)));
    }

    if let Some(filter) = &query.filter {
        sql.push_str(" WHERE ");
        sql.push_str(&render(filter));
    }

    if !query.group_by.is_empty() {
        let group_by: Vec<_> = query.group_by.iter().map(render).collect();
        sql.push_str(&format!(" GROUP BY {}", Comma(&group_by[..])));

        if let Some(having) = &query.having {
            sql.push_str(" HAVING ");
            sql.push_str(&render(having));
        }
    }

    if !query.order_by.is_empty() {
        let order_by: Vec<_> = query
            .order_by
            .iter()
            .map(|order_by| {
                let direction = match order_by.direction {
                    Direction::Asc => "ASC",
                    Direction::Desc => "DESC",
                };
                format!("{} {direction}", render(&order_by.expr))
            })
            .collect();
        sql.push_str(&format!(" ORDER BY {}", Comma(&order_by[..])));
    }

    let sql = translator.paginate(query, sql);
    tracing::trace!(sql = %sql, "rendered query");
    sql
}

fn table_ref<T: Translator + ?Sized>(translator: &T, table: &Table) -> String {
    let name = translator.table_name(table);

    if table.alias.is_empty() {
        name
    } else {
        format!("{name} {}", table.alias)
    }
}

/// ANSI row limiting:
/// `OFFSET :_offset ROWS FETCH NEXT :_limit ROWS ONLY`, or
/// `FETCH FIRST :_limit ROWS ONLY` without an offset.
///
/// The limit and offset are bound as parameters on `query`. A zero limit
/// leaves `sql` untouched; the offset is only honored together with a limit.
pub fn paginate(query: &mut Query, mut sql: String) -> String {
    if query.limit == 0 {
        return sql;
    }

    if query.skip > 0 {
        sql.push_str(&format!(
            " OFFSET :{OFFSET_PARAM} ROWS FETCH NEXT :{LIMIT_PARAM} ROWS ONLY"
        ));
        query.set_parameter(OFFSET_PARAM, query.skip);
    } else {
        sql.push_str(&format!(" FETCH FIRST :{LIMIT_PARAM} ROWS ONLY"));
    }

    query.set_parameter(LIMIT_PARAM, query.limit);
    sql
}
