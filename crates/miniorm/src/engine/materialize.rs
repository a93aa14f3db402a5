use super::RowErrorPolicy;
use crate::{
    codec,
    driver::{ColumnRef, Cursor},
    err,
    stmt::ValueRecord,
    Load, Projection, Result,
};

/// Drains `cursor`, loading one `T` per row.
pub(super) fn materialize<T: Load, C: Cursor>(
    cursor: &mut C,
    projection: &Projection,
    policy: RowErrorPolicy,
) -> Result<Vec<T>> {
    let mut ret = vec![];
    let mut index = 0;

    while cursor.next()? {
        index += 1;

        let loaded = read_row(cursor, projection).and_then(<T as Load>::load);

        match loaded {
            Ok(item) => ret.push(item),
            Err(err) => {
                let err = err.context(err!(
                    "failed to load row {index} as `{}`",
                    std::any::type_name::<T>()
                ));

                match policy {
                    RowErrorPolicy::Skip => {
                        log::warn!(target: "miniorm", "skipping row; {err}");
                    }
                    RowErrorPolicy::Fail => return Err(err),
                }
            }
        }
    }

    Ok(ret)
}

fn read_row<C: Cursor>(cursor: &mut C, projection: &Projection) -> Result<ValueRecord> {
    match projection {
        Projection::Composite(entity) => {
            let mut fields = Vec::with_capacity(entity.fields().len());

            for field in entity.fields() {
                let column = ColumnRef::Name(&field.column_name);
                fields.push(codec::fetch(cursor, column, field.kind)?);
            }

            Ok(ValueRecord::from_vec(fields))
        }
        Projection::Scalar(kind) => {
            let value = codec::fetch(cursor, ColumnRef::Position(1), *kind)?;
            Ok(ValueRecord::from_vec(vec![value]))
        }
    }
}
