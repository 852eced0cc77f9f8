use crate::{Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// A universally unique identifier
    Uuid(uuid::Uuid),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Field values of a nested record, keyed like the record's mapping
    Record(IndexMap<String, Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            value => Err(Error::type_conversion(value, "list")),
        }
    }

    pub fn to_record(self) -> Result<IndexMap<String, Value>> {
        match self {
            Self::Record(fields) => Ok(fields),
            value => Err(Error::type_conversion(value, "record")),
        }
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }

            impl From<&$ty> for Value {
                fn from(src: &$ty) -> Self {
                    Self::$variant(src.clone())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    uuid::Uuid => Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        assert_eq!(Value::from(Some(3i64)), Value::I64(3));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn from_vec() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec![Value::from("a"), Value::from("b")])
        );
    }

    #[test]
    fn to_list_rejects_scalars() {
        let err = Value::I32(1).to_list().unwrap_err();
        assert!(err.is_type_conversion());
    }
}
