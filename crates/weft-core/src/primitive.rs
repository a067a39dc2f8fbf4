use crate::{Error, Result, Type, Value};

/// A scalar field type that can be loaded from a single column value.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    /// Converts a column value into `Self`.
    ///
    /// Integer widths are converted with range checks; anything across
    /// incompatible kinds (numeric to boolean, string to number) fails.
    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

/// An address a row cursor can scan one column into.
///
/// Implemented by every [`Primitive`] field and by the nullable join-path
/// wrapper [`crate::Nullable`].
pub trait Scan {
    /// Declared type of the target. Drivers use it to convert storage values.
    fn ty(&self) -> Type;

    /// Whether the target accepts `NULL`.
    fn nullable(&self) -> bool;

    /// Stores `value` into the target.
    fn scan(&mut self, value: Value) -> Result<()>;

    /// Current value of the target.
    fn value(&self) -> Value;
}

impl<T: Primitive> Scan for T {
    fn ty(&self) -> Type {
        T::TYPE
    }

    fn nullable(&self) -> bool {
        T::NULLABLE
    }

    fn scan(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }

    fn value(&self) -> Value {
        self.to_value()
    }
}

macro_rules! impl_signed {
    ( $( $t:ty => $variant:ident ),+ ) => {
        $(
            impl Primitive for $t {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I64(v) => <$t>::try_from(*v).ok(),
                        Value::U64(v) => <$t>::try_from(*v).ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }

                fn to_value(&self) -> Value {
                    Value::I64(*self as i64)
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ( $( $t:ty => $variant:ident ),+ ) => {
        $(
            impl Primitive for $t {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I64(v) => <$t>::try_from(*v).ok(),
                        Value::U64(v) => <$t>::try_from(*v).ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }

                fn to_value(&self) -> Value {
                    Value::U64(*self as u64)
                }
            }
        )+
    };
}

impl_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
impl_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    /// Integers load only when the float holds them exactly.
    fn load(value: Value) -> Result<Self> {
        let converted = match value {
            Value::F64(v) => return Ok(v),
            Value::I64(v) => Some(v as f64).filter(|f| *f as i128 == v as i128),
            Value::U64(v) => Some(v as f64).filter(|f| *f as u128 == v as u128),
            _ => None,
        };
        converted.ok_or_else(|| Error::type_conversion(value, "f64"))
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for f32 {
    const TYPE: Type = Type::F32;

    /// Loads only values that survive the round trip through `f32`.
    fn load(value: Value) -> Result<Self> {
        let wide = f64::load(value)?;
        let narrow = wide as f32;

        if narrow as f64 == wide || wide.is_nan() {
            Ok(narrow)
        } else {
            Err(Error::type_conversion(Value::F64(wide), "f32"))
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self as f64)
    }
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for jiff::Timestamp {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "Timestamp")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
