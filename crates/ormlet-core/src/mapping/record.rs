use crate::stmt::{Type, Value};
use crate::Result;

use std::{any::Any, any::TypeId, fmt};

/// Reads a field from a record instance; `None` if the instance is not of
/// the declaring record type.
pub type GetFn = fn(&dyn Any) -> Option<Value>;

/// Writes a field on a record instance; `None` if the instance is not of the
/// declaring record type.
pub type SetFn = fn(&mut dyn Any, Value) -> Option<Result<()>>;

/// Borrows an embedded record out of its containing record.
pub type ProjectFn = fn(&dyn Any) -> Option<&dyn Any>;

/// Mutably borrows an embedded record out of its containing record.
pub type ProjectMutFn = fn(&mut dyn Any) -> Option<&mut dyn Any>;

/// A struct whose fields can be enumerated and accessed at runtime.
///
/// Implemented by `#[derive(Record)]`, which emits the [`RecordType`] field
/// table for the struct.
pub trait Record: Any {
    /// The field table of this record type.
    fn record_type() -> &'static RecordType
    where
        Self: Sized;

    /// The field table of the instance's record type.
    fn descriptor(&self) -> &'static RecordType;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A boxed record is accessed as the record it points to.
impl<T: Record> Record for Box<T> {
    fn record_type() -> &'static RecordType {
        T::record_type()
    }

    fn descriptor(&self) -> &'static RecordType {
        (**self).descriptor()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        (**self).as_any_mut()
    }
}

/// Field table of one record type.
pub struct RecordType {
    /// Name of the Rust type
    pub name: &'static str,

    /// Identifies the Rust type
    pub type_id: TypeId,

    /// Fields in declaration order, private ones included.
    pub fields: Vec<FieldDef>,
}

/// One field as declared on a record.
#[derive(Debug)]
pub struct FieldDef {
    pub name: &'static str,

    /// Index of the field in the declaring record
    pub position: usize,

    pub visibility: Visibility,

    /// Declared type, before any nullable wrapping
    pub ty: Type,

    /// True if the field is annotated with `#[key]`
    pub key: bool,

    /// Raw text of the `#[tag = "..."]` attribute, empty when absent.
    pub annotation: &'static str,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A leaf field read and written as a [`Value`].
    Value(Accessor),

    /// A record flattened into its container (`#[embed]`).
    Embed(Projection),

    /// A private field; the mapping never reads or writes it.
    Skipped,
}

#[derive(Clone, Copy)]
pub struct Accessor {
    pub get: GetFn,
    pub set: SetFn,
}

#[derive(Clone, Copy)]
pub struct Projection {
    pub project: ProjectFn,
    pub project_mut: ProjectMutFn,
}

impl RecordType {
    pub fn new<T: Any>(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor")
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Projection")
    }
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}
