use crate::{
    predicate::{ComparePredicate, Predicate},
    schema::{FieldKind, LayerSchema},
    value::ValueKind,
};
use thiserror::Error as ThisError;

///
/// PredicateError
///

#[derive(Debug, ThisError)]
pub enum PredicateError {
    #[error("comparison against null for field '{field}'; use IsNull instead")]
    NullComparison { field: String },

    #[error("operand kind {actual} does not match field '{field}' of kind {expected}")]
    OperandKindMismatch {
        field: String,
        expected: FieldKind,
        actual: ValueKind,
    },

    #[error("unknown field '{field}' in predicate")]
    UnknownField { field: String },
}

/// Check every field reference and operand kind before any row is read.
pub fn validate(predicate: &Predicate, schema: &LayerSchema) -> Result<(), PredicateError> {
    match predicate {
        Predicate::True => Ok(()),
        Predicate::And(preds) | Predicate::Or(preds) => {
            preds.iter().try_for_each(|p| validate(p, schema))
        }
        Predicate::Not(inner) => validate(inner, schema),
        Predicate::Compare(cmp) => validate_compare(cmp, schema),
        Predicate::IsNull { field } => match schema.resolve(field) {
            Some(_) => Ok(()),
            None => Err(PredicateError::UnknownField {
                field: field.clone(),
            }),
        },
    }
}

fn validate_compare(cmp: &ComparePredicate, schema: &LayerSchema) -> Result<(), PredicateError> {
    let Some(field_ref) = schema.resolve(&cmp.field) else {
        return Err(PredicateError::UnknownField {
            field: cmp.field.clone(),
        });
    };

    let kind = cmp.value.kind();
    if kind == ValueKind::Null {
        return Err(PredicateError::NullComparison {
            field: cmp.field.clone(),
        });
    }
    if !field_ref.kind.accepts(kind) {
        return Err(PredicateError::OperandKindMismatch {
            field: cmp.field.clone(),
            expected: field_ref.kind,
            actual: kind,
        });
    }

    Ok(())
}
