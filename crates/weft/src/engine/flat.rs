use weft_core::{
    schema::{self, FieldDescriptor, FieldTy, TypeDescriptor},
    Error, FieldMut, Record, Result, Rows, Scan,
};

/// Scans the cursor's current row onto `record`.
///
/// Columns bind to fields by name, in declaration order. Nested records are
/// searched depth first against the same column cursor. Fields whose name
/// does not match the next column are skipped and keep their value.
pub fn scan_row(rows: &mut dyn Rows, record: &mut dyn Record) -> Result<()> {
    let descriptor = schema::describe_nested(record.nested())?;
    let columns = rows.columns().to_vec();
    let mut targets = scan_targets(&descriptor, record, &columns)?;
    rows.scan(&mut targets)
}

/// Returns the scan targets binding `columns` onto `record`, in column order.
///
/// `Option<Box<_>>` fields are allocated when the next column belongs to
/// them. Fails with an unmapped column error if a column binds to nothing.
pub fn scan_targets<'a>(
    descriptor: &TypeDescriptor,
    record: &'a mut dyn Record,
    columns: &[String],
) -> Result<Vec<&'a mut dyn Scan>> {
    let mut cursor = Cursor {
        columns,
        position: 0,
    };
    let mut targets = Vec::with_capacity(columns.len());

    bind(descriptor, record, &mut cursor, &mut targets)?;

    match cursor.head() {
        Some(column) => Err(Error::unmapped_column(column)),
        None => Ok(targets),
    }
}

struct Cursor<'c> {
    columns: &'c [String],
    position: usize,
}

impl<'c> Cursor<'c> {
    fn head(&self) -> Option<&'c str> {
        self.columns.get(self.position).map(String::as_str)
    }
}

/// Binds fields of one record. Returns `true` if any column was consumed.
fn bind<'a>(
    descriptor: &TypeDescriptor,
    record: &'a mut dyn Record,
    cursor: &mut Cursor<'_>,
    targets: &mut Vec<&'a mut dyn Scan>,
) -> Result<bool> {
    let mut consumed = false;

    for (field, slot) in descriptor.fields.iter().zip(record.fields_mut()) {
        let Some(head) = cursor.head() else {
            break;
        };

        consumed |= match (&field.ty, slot) {
            (FieldTy::Primitive(_), FieldMut::Primitive(target)) => {
                if field.matches(head) {
                    targets.push(target);
                    cursor.position += 1;
                    true
                } else {
                    false
                }
            }
            (FieldTy::Embedded(nested), FieldMut::Embedded(record)) => {
                bind(nested, record, cursor, targets)?
            }
            (FieldTy::Boxed(nested), FieldMut::Boxed(boxed)) => {
                if nested.accepts(head) {
                    bind(nested, boxed.record_or_insert(), cursor, targets)?
                } else {
                    false
                }
            }
            // Collections only take part in join queries
            (FieldTy::List(_), FieldMut::List(_)) => false,
            _ => return Err(shape_mismatch(descriptor, field)),
        };
    }

    Ok(consumed)
}

pub(super) fn shape_mismatch(descriptor: &TypeDescriptor, field: &FieldDescriptor) -> Error {
    Error::invalid_shape(format!(
        "`{}::{}` does not match the kind declared by its shape",
        descriptor.name, field.name
    ))
}
