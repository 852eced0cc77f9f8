use super::{FieldKind, Mapping, Projection, Property, Record};
use crate::stmt::Type;

/// Builds the mapping of `ty`, keying every property by `prefix` followed by
/// the field name.
///
/// A record wrapped in `Type::Option` is unwrapped first. Any type other than
/// a record yields an empty mapping: callers treat "nothing to map" as a
/// regular outcome, not an error.
pub fn build(prefix: &str, ty: &Type) -> Mapping {
    let mut mapping = Mapping::default();

    if let Some(record) = ty.as_record() {
        walk(prefix, ty, record.name, &[], &mut mapping);

        tracing::debug!(
            record = record.name,
            prefix,
            properties = mapping.len(),
            "built mapping"
        );
    }

    mapping
}

/// Builds the mapping of the record type of `instance`.
pub fn build_of(prefix: &str, instance: &dyn Record) -> Mapping {
    build(prefix, &Type::Record(instance.descriptor()))
}

fn walk(
    prefix: &str,
    ty: &Type,
    root: &'static str,
    path: &[Projection],
    mapping: &mut Mapping,
) {
    let Some(record) = ty.as_record() else {
        return;
    };

    for field in &record.fields {
        if !field.visibility.is_public() {
            continue;
        }

        match &field.kind {
            FieldKind::Skipped => continue,
            FieldKind::Embed(projection) => {
                let mut nested = path.to_vec();
                nested.push(*projection);
                walk(prefix, &field.ty, root, &nested, mapping);
            }
            FieldKind::Value(accessor) => {
                let key = if prefix.is_empty() {
                    field.name.to_string()
                } else {
                    format!("{prefix}{}", field.name)
                };

                // Plain fields are stored behind an `Option` so every
                // property can hold "absent"
                let ty = if field.ty.is_nullable() {
                    field.ty.clone()
                } else {
                    Type::option(field.ty.clone())
                };

                let property = Property {
                    name: field.name,
                    position: field.position,
                    element_ty: field.ty.element().cloned(),
                    ty,
                    key: field.key,
                    annotation: field.annotation,
                    record: root,
                    path: path.to_vec(),
                    get: accessor.get,
                    set: accessor.set,
                };

                tracing::trace!(key = %key, ty = ?property.ty, "mapped property");
                mapping.insert(key, property);
            }
        }
    }
}
