use std::hash::{Hash, Hasher};

/// A database column, as referenced by statements.
///
/// A column is identified by its table and name, so a column can key the
/// assignment maps of insert and update statements.
#[derive(Debug, Clone)]
pub struct Column {
    /// Name of the table owning the column.
    pub table: String,

    /// Alias of the owning table inside queries.
    pub alias: String,

    /// The name of the column in the database.
    pub name: String,

    /// True if the column is part of the table's primary key
    pub key: bool,

    /// True if the column is computed by the database and must never be
    /// written.
    pub is_virtual: bool,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: String::new(),
            name: name.into(),
            key: false,
            is_virtual: false,
        }
    }

    pub fn is_key(&self) -> bool {
        self.key
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.name == other.name
    }
}

impl Eq for Column {}

impl Hash for Column {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.name.hash(state);
    }
}
