mod builder;
pub use builder::{build, build_of};

mod primitive;
pub use primitive::{assign_record, load_record, record_value, Primitive};

mod property;
pub use property::Property;

mod record;
pub use record::{
    Accessor, FieldDef, FieldKind, GetFn, ProjectFn, ProjectMutFn, Projection, Record,
    RecordType, SetFn, Visibility,
};

use crate::stmt::Type;

use indexmap::IndexMap;

/// Logical field path to [`Property`], in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    properties: IndexMap<String, Property>,
}

impl Mapping {
    /// Builds the mapping of record type `T`.
    pub fn of<T: Record>(prefix: &str) -> Self {
        build(prefix, &Type::Record(T::record_type()))
    }

    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> + '_ {
        self.properties
            .iter()
            .map(|(key, property)| (key.as_str(), property))
    }

    /// Properties marked as part of the record's key.
    pub fn key_properties(&self) -> impl Iterator<Item = (&str, &Property)> + '_ {
        self.iter().filter(|(_, property)| property.key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Later declarations replace earlier ones with the same key.
    fn insert(&mut self, key: String, property: Property) {
        self.properties.insert(key, property);
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Property);
    type IntoIter = indexmap::map::Iter<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
