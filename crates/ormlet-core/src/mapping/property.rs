use super::{GetFn, Projection, Record, SetFn};
use crate::stmt::{Type, Value};
use crate::{Error, Result};

use std::{any::Any, fmt};

/// Metadata and accessors for one mapped field.
#[derive(Clone)]
pub struct Property {
    /// The record field identifier
    pub name: &'static str,

    /// Index of the field within the record declaring it
    pub position: usize,

    /// Storable type. Always `Type::Option` or `Type::List`, so "absent" is
    /// representable for every field.
    pub ty: Type,

    /// Element type, set only when the field is a collection.
    pub element_ty: Option<Type>,

    /// True if the field is part of the record's key
    pub key: bool,

    /// Raw `#[tag = "..."]` text, interpreted by callers.
    pub annotation: &'static str,

    /// Name of the record the mapping was built from
    pub(super) record: &'static str,

    /// Embedded records to traverse, outermost first
    pub(super) path: Vec<Projection>,

    pub(super) get: GetFn,

    pub(super) set: SetFn,
}

impl Property {
    /// Returns an empty slot of the storable type, ready to receive a
    /// database value.
    pub fn allocate(&self) -> Value {
        match self.ty {
            Type::List(_) => Value::List(vec![]),
            _ => Value::Null,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.element_ty.is_some()
    }

    /// Writes `value` into the field of `instance`.
    ///
    /// Null is never written: the field keeps its current content and
    /// `Ok(false)` is returned. A value that does not fit the field's type,
    /// or an instance of another record type, is an error.
    pub fn set(&self, instance: &mut dyn Record, value: Value) -> Result<bool> {
        if value.is_null() {
            return Ok(false);
        }

        let mut target = instance.as_any_mut();
        for step in &self.path {
            target = (step.project_mut)(target).ok_or_else(|| self.mismatch())?;
        }

        match (self.set)(target, value) {
            Some(res) => res.map(|_| true).map_err(|cause| {
                cause.context(crate::err!("cannot set `{}` of `{}`", self.name, self.record))
            }),
            None => Err(self.mismatch()),
        }
    }

    /// Returns the value currently held by the field of `instance`.
    pub fn get(&self, instance: &dyn Record) -> Result<Value> {
        let mut target: &dyn Any = instance.as_any();
        for step in &self.path {
            target = (step.project)(target).ok_or_else(|| self.mismatch())?;
        }

        (self.get)(target).ok_or_else(|| self.mismatch())
    }

    fn mismatch(&self) -> Error {
        Error::record_mismatch(self.name, self.record)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("ty", &self.ty)
            .field("element_ty", &self.element_ty)
            .field("key", &self.key)
            .field("annotation", &self.annotation)
            .field("record", &self.record)
            .finish()
    }
}
