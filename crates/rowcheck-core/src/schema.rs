use crate::{MAX_FIELD_COUNT, value::ValueKind};
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldKind
///
/// Declared column type. Aligned with the `Value` variants a field of this
/// kind may hold.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Integer,
    Real,
    Text,
}

impl FieldKind {
    /// Whether a value of `kind` may be stored under this field kind.
    /// `Null` is storable anywhere (unset field).
    #[must_use]
    pub const fn accepts(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (Self::Integer, ValueKind::Int)
                | (Self::Real, ValueKind::Real)
                | (Self::Text, ValueKind::Text)
                | (_, ValueKind::Null)
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
        };
        write!(f, "{label}")
    }
}

///
/// FieldDef
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

///
/// FieldRef
///
/// Resolved column handle: stable index plus declared kind.
/// Resolve once per verification call and reuse for every row.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldRef {
    pub index: usize,
    pub kind: FieldKind,
}

///
/// LayerSchema
///
/// Ordered, named field declarations for one layer. Names resolve
/// case-insensitively, so schemas reject names that collide under ASCII
/// case folding.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LayerSchema {
    fields: Vec<FieldDef>,
}

impl LayerSchema {
    pub fn new(fields: Vec<FieldDef>) -> Result<Self, SchemaError> {
        if fields.len() > MAX_FIELD_COUNT {
            return Err(SchemaError::TooManyFields {
                count: fields.len(),
                max: MAX_FIELD_COUNT,
            });
        }

        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName { index });
            }

            if let Some(earlier) = fields[..index]
                .iter()
                .position(|f| f.name.eq_ignore_ascii_case(&field.name))
            {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                    left_index: earlier,
                    right_index: index,
                });
            }
        }

        Ok(Self { fields })
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    #[must_use]
    pub fn field_at(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    /// Resolve a column by name, ASCII case-insensitively.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<FieldRef> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
            .map(|index| FieldRef {
                index,
                kind: self.fields[index].kind,
            })
    }
}

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("duplicate field name '{name}' at positions {left_index} and {right_index}")]
    DuplicateField {
        name: String,
        left_index: usize,
        right_index: usize,
    },

    #[error("field name at index {index} must be non-empty")]
    EmptyFieldName { index: usize },

    #[error("schema declares {count} fields; at most {max} are supported")]
    TooManyFields { count: usize, max: usize },
}
