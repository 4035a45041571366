mod compare;
mod real;


use serde::Serialize;
use std::fmt;

// re-exports
pub use compare::{eq_with_tolerance, strict_eq, strict_order_cmp};
pub use real::{Real, RealError};

///
/// Value
///
/// Tagged scalar attribute value.
///
/// Null → the field has no value assigned for this row.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Null,
    Real(Real),
    Text(String),
}

impl Value {
    /// Discriminant-only projection used by schema checks.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Null => ValueKind::Null,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Real> for Value {
    fn from(v: Real) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

///
/// ValueKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueKind {
    Int,
    Null,
    Real,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Int => "int",
            Self::Null => "null",
            Self::Real => "real",
            Self::Text => "text",
        };
        write!(f, "{label}")
    }
}

///
/// FieldValue
///
/// Conversion into the tagged value model, used to accept expected-sequence
/// inputs in their natural Rust types. `f64` has no impl on purpose; go
/// through [`Real::try_new`] so non-finite payloads are rejected up front.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FieldValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FieldValue for Real {
    fn to_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
