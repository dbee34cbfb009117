use serde_json::Value;

/// One argument to a log call.
///
/// Log calls accept an ordered, heterogeneous argument list; this enum is
/// the closed set of shapes the composer understands. `From` conversions
/// keep call sites terse (`"text".into()`, `500.into()`,
/// `json!({..}).into()`).
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    /// A ready-made string fragment.
    Text(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer wider than `i64` can hold.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A single character.
    Char(char),
    /// A composite value. Only its generic serialized form survives
    /// composition; the structure itself is not preserved.
    Composite(Value),
}

impl LogArg {
    /// The canonical textual form the composer concatenates.
    ///
    /// Primitives use their natural text; composites use their compact
    /// serialized form. Total over every variant.
    #[must_use]
    pub fn canonical_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Char(c) => c.to_string(),
            Self::Composite(v) => v.to_string(),
        }
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for LogArg {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<Value> for LogArg {
    fn from(v: Value) -> Self {
        Self::Composite(v)
    }
}

impl From<i64> for LogArg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for LogArg {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogArg {
            fn from(n: $ty) -> Self {
                Self::Int(i64::from(n))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogArg {
            fn from(n: $ty) -> Self {
                Self::UInt(u64::from(n))
            }
        })*
    };
}

from_signed!(i8, i16, i32);
from_unsigned!(u8, u16, u32);

impl From<f32> for LogArg {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for LogArg {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_render_their_natural_form() {
        assert_eq!(LogArg::from("abc").canonical_text(), "abc");
        assert_eq!(LogArg::from(42i32).canonical_text(), "42");
        assert_eq!(LogArg::from(-7i64).canonical_text(), "-7");
        assert_eq!(LogArg::from(u64::MAX).canonical_text(), u64::MAX.to_string());
        assert_eq!(LogArg::from(true).canonical_text(), "true");
        assert_eq!(LogArg::from('x').canonical_text(), "x");
        assert_eq!(LogArg::from(3.5f64).canonical_text(), "3.5");
    }

    #[test]
    fn composites_render_their_serialized_form() {
        let arg = LogArg::from(json!({"code": 500}));
        assert_eq!(arg.canonical_text(), r#"{"code":500}"#);
    }
}
