//! A dialect overriding a single step sees that override used by every
//! generic rendering routine.

use ormlet_core::{
    schema::{Column, Table},
    stmt::{Expr, Insert, Query, Update},
};
use ormlet_sql::{generic, Translator};

use pretty_assertions::assert_eq;

/// Quotes identifiers, renders `?` placeholders and nothing else.
struct Quoting;

impl Translator for Quoting {
    fn placeholder(&self, _index: usize, _name: &str) -> String {
        "?".to_string()
    }

    fn table_name(&self, table: &Table) -> String {
        format!("\"{}\"", table.name)
    }

    fn column_name(&self, column: &Column) -> String {
        format!("\"{}\"", column.name)
    }
}

/// Wraps the generic insert and tags it.
struct Tagging;

impl Translator for Tagging {
    fn render_insert(&self, insert: &Insert) -> String {
        format!("{} /* tagged */", generic::render_insert(self, insert))
    }
}

fn users() -> Table {
    Table::new("users").key("id").column("name")
}

#[test]
fn identifier_override_reaches_every_statement() {
    let table = users();

    let mut insert = Insert::new(table.clone());
    insert.set_value(table.col("name"), "carl");
    assert_eq!(
        Quoting.render_insert(&insert),
        "INSERT INTO \"users\"(\"name\") VALUES(:name)"
    );

    let mut update = Update::new(table.clone());
    update
        .set_value(table.col("name"), "carl")
        .filter(Expr::eq(table.col("id"), Expr::param("id")));
    assert_eq!(
        Quoting.render_update(&update),
        "UPDATE \"users\" SET \"name\" = :name WHERE \"id\" = :id"
    );

    let mut query = Query::new(table);
    assert_eq!(
        Quoting.render_query(&mut query),
        "SELECT t0.\"id\", t0.\"name\" FROM \"users\" t0"
    );
}

#[test]
fn wrapping_override_keeps_generic_body() {
    let table = users();
    let mut insert = Insert::new(table.clone());
    insert.set_value(table.col("name"), "carl");

    assert_eq!(
        Tagging.render_insert(&insert),
        "INSERT INTO users(name) VALUES(:name) /* tagged */"
    );
}

#[test]
fn bind_uses_the_override() {
    let table = users();
    let mut insert = Insert::new(table.clone());
    insert
        .set_value(table.col("id"), 1i64)
        .set_value(table.col("name"), "carl");

    let sql = Quoting.render_insert(&insert);
    let bound = ormlet_sql::bind(&Quoting, &sql, &insert.parameters).unwrap();

    assert_eq!(bound.sql, "INSERT INTO \"users\"(\"id\", \"name\") VALUES(?, ?)");
    assert_eq!(bound.names, ["id", "name"]);
}
