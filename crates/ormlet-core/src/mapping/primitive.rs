use super::{build_of, Record};
use crate::stmt::{Type, Value};
use crate::{err, Error, Result};

/// A Rust type that can be stored in a mapped field.
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;

    /// Writes `value` into an existing slot.
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = Self::load(value)?;
        Ok(())
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
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

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn assign(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (slot, Value::Null) => *slot = None,
            (Some(inner), value) => inner.assign(value)?,
            (slot, value) => *slot = Some(T::load(value)?),
        }
        Ok(())
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        value.to_list()?.into_iter().map(T::load).collect()
    }
}

impl<T: Primitive, const N: usize> Primitive for [T; N] {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        let items = Vec::<T>::load(value)?;
        let len = items.len();

        items
            .try_into()
            .map_err(|_| err!("expected {N} items for an array field; got {len}"))
    }
}

/// Field values of `record`, keyed like its mapping.
///
/// Used by `#[derive(Record)]` so a record can be the type of a plain field.
pub fn record_value(record: &dyn Record) -> Value {
    let mapping = build_of("", record);

    Value::Record(
        mapping
            .iter()
            // a property of the record's own mapping always matches it
            .map(|(key, property)| (key.to_string(), property.get(record).unwrap_or_default()))
            .collect(),
    )
}

/// Writes the field values of a `Value::Record` into `record`. Keys missing
/// from the value leave their field untouched.
pub fn assign_record(record: &mut dyn Record, value: Value) -> Result<()> {
    let mapping = build_of("", record);

    for (key, value) in value.to_record()? {
        let Some(property) = mapping.get(&key) else {
            return Err(err!(
                "record `{}` has no field `{key}`",
                record.descriptor().name
            ));
        };
        property.set(record, value)?;
    }

    Ok(())
}

/// A record value cannot be turned into a new record instance: it is only
/// ever assigned into an existing one.
pub fn load_record<T: Record>(value: Value) -> Result<T> {
    Err(Error::type_conversion(value, T::record_type().name))
}
