/// The kind of data-manipulation statement being rendered.
///
/// Expression rendering may depend on it: a column renders qualified by its
/// table alias inside a query and bare inside write statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DmlKind {
    Insert,
    Update,
    Delete,
    Query,
}

impl DmlKind {
    pub fn is_query(self) -> bool {
        matches!(self, Self::Query)
    }
}
