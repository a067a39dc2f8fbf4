/// A single column value.
///
/// Integers are held at their widest width; narrowing happens when the value
/// is scanned into a field.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer
    I64(i64),

    /// Unsigned integer
    U64(u64),

    /// Floating point
    F64(f64),

    /// String value
    String(String),

    /// An instant in time
    Timestamp(jiff::Timestamp),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in conversion errors.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
        }
    }
}

macro_rules! impl_from_signed {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::I64(src as i64)
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::U64(src as u64)
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F64(src as f64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(src: jiff::Timestamp) -> Self {
        Self::Timestamp(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}
