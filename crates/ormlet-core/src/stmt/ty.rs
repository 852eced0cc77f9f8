use crate::mapping::RecordType;

/// The runtime type of a mapped field.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// A universally unique identifier
    Uuid,

    /// A nullable slot holding a value of the inner type.
    Option(Box<Type>),

    /// A list of a single type
    List(Box<Type>),

    /// A record with its own field table.
    Record(&'static RecordType),

    /// A type the mapping never reads or writes, named for diagnostics.
    Opaque(&'static str),
}

impl Type {
    pub fn option(ty: impl Into<Self>) -> Self {
        Self::Option(Box::new(ty.into()))
    }

    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// True when the type can represent "absent" without wrapping.
    pub fn is_nullable(&self) -> bool {
        self.is_option() || self.is_list()
    }

    /// Returns the element type of a list.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Self::List(item) => Some(item),
            _ => None,
        }
    }

    /// Returns the record this type points to, looking through one level of
    /// `Option`.
    pub fn as_record(&self) -> Option<&'static RecordType> {
        match self {
            Self::Record(record) => Some(*record),
            Self::Option(inner) => match **inner {
                Self::Record(record) => Some(record),
                _ => None,
            },
            _ => None,
        }
    }
}
