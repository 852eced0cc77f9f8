/// How a database produces the value of an auto-generated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoKeyStrategy {
    /// Keys are always supplied by the caller.
    #[default]
    None,

    /// An identity column; the key is read back after the insert.
    Identity,

    /// A sequence queried before the insert, see
    /// [`Translator::auto_number_query`](crate::Translator::auto_number_query).
    Sequence,

    /// The insert statement itself returns the generated key.
    Returning,
}

impl AutoKeyStrategy {
    /// True when the key is produced by the insert statement itself.
    pub fn is_returning(self) -> bool {
        matches!(self, Self::Returning)
    }
}
