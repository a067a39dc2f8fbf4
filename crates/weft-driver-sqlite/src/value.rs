use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use weft_core::{bail, Result, Type, Value as CoreValue};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core weft value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a stored SQLite value, using the declared type of the
    /// target it is headed for.
    ///
    /// SQLite has no boolean or timestamp storage class: booleans are stored
    /// as integers and timestamps as RFC 3339 text or Unix seconds. Every
    /// other pairing converts as-is and is checked by the target.
    pub fn from_sql(stored: &SqlValue, ty: Type) -> Result<Self> {
        let core_value = match stored {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                Type::Bool => CoreValue::Bool(*value != 0),
                Type::Timestamp => CoreValue::Timestamp(jiff::Timestamp::from_second(*value)?),
                ty if ty.is_unsigned() && *value >= 0 => CoreValue::U64(*value as u64),
                _ => CoreValue::I64(*value),
            },
            SqlValue::Real(value) => CoreValue::F64(*value),
            SqlValue::Text(value) => match ty {
                Type::Timestamp => CoreValue::Timestamp(value.parse()?),
                _ => CoreValue::String(value.clone()),
            },
            SqlValue::Blob(_) => bail!("blob columns are not supported; target type {ty:?}"),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::U64(v) => i64::try_from(*v)
                .map(|v| ToSqlOutput::Owned(SqlValue::Integer(v)))
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
