use super::Column;

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// Alias used to qualify the table's columns inside queries
    pub alias: String,

    /// The table's columns
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: "t0".to_string(),
            columns: vec![],
        }
    }

    /// Re-aliases the table and every column already declared on it.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();

        for column in &mut self.columns {
            column.alias = self.alias.clone();
        }

        self
    }

    /// Adds a plain column.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        let column = self.new_column(name);
        self.columns.push(column);
        self
    }

    /// Adds a primary key column.
    pub fn key(mut self, name: impl Into<String>) -> Self {
        let mut column = self.new_column(name);
        column.key = true;
        self.columns.push(column);
        self
    }

    /// Adds a computed column that is read but never written.
    pub fn virtual_column(mut self, name: impl Into<String>) -> Self {
        let mut column = self.new_column(name);
        column.is_virtual = true;
        self.columns.push(column);
        self
    }

    fn new_column(&self, name: impl Into<String>) -> Column {
        let mut column = Column::new(self.name.clone(), name);
        column.alias = self.alias.clone();
        column
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[track_caller]
    pub fn col(&self, name: &str) -> &Column {
        match self.get_column(name) {
            Some(column) => column,
            None => panic!("table `{}` has no column `{name}`", self.name),
        }
    }

    pub fn key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.is_key())
    }

    /// Returns the table's only key column.
    ///
    /// # Panics
    ///
    /// If the table does not have exactly one key column.
    #[track_caller]
    pub fn single_key_column(&self) -> &Column {
        let mut keys = self.key_columns();

        match (keys.next(), keys.next()) {
            (Some(column), None) => column,
            (None, _) => panic!("table `{}` has no key column", self.name),
            (Some(_), Some(_)) => panic!("table `{}` has a composite key", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_column() {
        let table = Table::new("users").key("id").column("name");
        assert_eq!(table.single_key_column().name, "id");
        assert_eq!(table.col("name").table, "users");
    }

    #[test]
    fn alias_propagates_to_columns() {
        let table = Table::new("users").key("id").with_alias("t1").column("name");
        assert_eq!(table.col("id").alias, "t1");
        assert_eq!(table.col("name").alias, "t1");
    }

    #[test]
    #[should_panic(expected = "composite key")]
    fn composite_key_panics() {
        let table = Table::new("memberships").key("user_id").key("group_id");
        table.single_key_column();
    }

    #[test]
    #[should_panic(expected = "no key column")]
    fn missing_key_panics() {
        Table::new("logs").column("line").single_key_column();
    }
}
