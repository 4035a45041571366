use crate::{
    geometry::Geometry,
    schema::{FieldKind, FieldRef, LayerSchema},
    value::{Value, ValueKind},
};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// Feature
///
/// One row: values positionally aligned with a layer schema, plus an
/// optional geometry payload. Unset fields read as `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Feature {
    values: Vec<Value>,
    geometry: Option<Geometry>,
}

impl Feature {
    /// A blank feature shaped for `schema`: every field unset, no geometry.
    #[must_use]
    pub fn blank(schema: &LayerSchema) -> Self {
        Self {
            values: vec![Value::Null; schema.field_count()],
            geometry: None,
        }
    }

    /// Build a feature from a full row of values, checked against `schema`.
    pub fn from_values(schema: &LayerSchema, values: Vec<Value>) -> Result<Self, FeatureError> {
        let feature = Self {
            values,
            geometry: None,
        };
        feature.check_against(schema)?;

        Ok(feature)
    }

    /// Attach a geometry payload.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Assign one field through a resolved reference, kind-checked.
    pub fn set(&mut self, field: FieldRef, value: Value) -> Result<(), FeatureError> {
        if !field.kind.accepts(value.kind()) {
            return Err(FeatureError::KindMismatch {
                index: field.index,
                expected: field.kind,
                actual: value.kind(),
            });
        }

        let len = self.values.len();
        let Some(slot) = self.values.get_mut(field.index) else {
            return Err(FeatureError::IndexOutOfBounds {
                index: field.index,
                len,
            });
        };
        *slot = value;

        Ok(())
    }

    /// Value at a resolved field; unset reads as `Null`.
    #[must_use]
    pub fn value(&self, field: FieldRef) -> &Value {
        self.values.get(field.index).unwrap_or(&Value::Null)
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub const fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }

    /// Validate arity and per-field kinds against `schema`.
    pub fn check_against(&self, schema: &LayerSchema) -> Result<(), FeatureError> {
        if self.values.len() != schema.field_count() {
            return Err(FeatureError::ArityMismatch {
                expected: schema.field_count(),
                actual: self.values.len(),
            });
        }

        for (index, value) in self.values.iter().enumerate() {
            let Some(field) = schema.field_at(index) else {
                continue;
            };
            if !field.kind.accepts(value.kind()) {
                return Err(FeatureError::KindMismatch {
                    index,
                    expected: field.kind,
                    actual: value.kind(),
                });
            }
        }

        Ok(())
    }
}

///
/// FeatureError
///

#[derive(Debug, ThisError)]
pub enum FeatureError {
    #[error("row carries {actual} values; schema declares {expected} fields")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("field index {index} out of bounds for a row of {len} values")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("field {index} declared {expected}, got a {actual} value")]
    KindMismatch {
        index: usize,
        expected: FieldKind,
        actual: ValueKind,
    },
}
