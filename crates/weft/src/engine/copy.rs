use super::flat::shape_mismatch;

use weft_core::{
    schema::{FieldTy, TypeDescriptor},
    Error, FieldMut, Nullable, Record, Result,
};

/// Copies one level's worth of scanned values into `record`.
///
/// `columns` and `values` cover only that level. Fields bind to columns by
/// name with the same cursor rules as [`crate::scan_row`]. `NULL` values are
/// skipped, so the field keeps its default. `Option<Box<_>>` fields are
/// allocated only when at least one of their values is non-null.
///
/// Returns `true` if any non-null value was copied. Fails with an unmapped
/// column error if a column binds to no field of the level.
pub fn copy_level(
    descriptor: &TypeDescriptor,
    record: &mut dyn Record,
    columns: &[String],
    values: &[Nullable],
) -> Result<bool> {
    debug_assert_eq!(columns.len(), values.len());

    let mut cursor = 0;
    let copied = copy_fields(descriptor, record, columns, values, &mut cursor)?;

    match columns.get(cursor) {
        Some(column) => Err(Error::unmapped_column(column.as_str())),
        None => Ok(copied),
    }
}

fn copy_fields(
    descriptor: &TypeDescriptor,
    record: &mut dyn Record,
    columns: &[String],
    values: &[Nullable],
    cursor: &mut usize,
) -> Result<bool> {
    let mut copied = false;

    for (field, slot) in descriptor.fields.iter().zip(record.fields_mut()) {
        let Some(head) = columns.get(*cursor) else {
            break;
        };

        match (&field.ty, slot) {
            (FieldTy::Primitive(_), FieldMut::Primitive(target)) => {
                if !field.matches(head) {
                    continue;
                }

                if let Some(value) = values[*cursor].get() {
                    target.scan(value).map_err(|err| {
                        err.context(weft_core::err!(
                            "copying column `{head}` into `{}::{}`",
                            descriptor.name,
                            field.name
                        ))
                    })?;
                    copied = true;
                }

                *cursor += 1;
            }
            (FieldTy::Embedded(nested), FieldMut::Embedded(record)) => {
                copied |= copy_fields(nested, record, columns, values, cursor)?;
            }
            (FieldTy::Boxed(nested), FieldMut::Boxed(boxed)) => {
                if nested.accepts(head) {
                    let mut filled = false;
                    boxed.fill(&mut |record: &mut dyn Record| {
                        filled = copy_fields(nested, record, columns, values, cursor)?;
                        Ok(filled)
                    })?;
                    copied |= filled;
                }
            }
            (FieldTy::List(_), FieldMut::List(_)) => {}
            _ => return Err(shape_mismatch(descriptor, field)),
        }
    }

    Ok(copied)
}
