mod paired;


use crate::{
    cursor::RowSource,
    obs::{self, VerifyEvent, VerifyOutcome},
    value::{FieldValue, Value, eq_with_tolerance},
};
use serde::Serialize;
use thiserror::Error as ThisError;

// re-exports
pub use paired::{PairedVerifyError, verify_paired};

///
/// VerifyError
///
/// The four terminal verification failures. None are retriable; a single
/// pass through the cursor is definitive, and the calling scenario reports
/// failure and proceeds to cleanup.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum VerifyError {
    #[error("source yielded rows past the {expected} expected for field '{field}'")]
    ExtraRowsPresent { field: String, expected: usize },

    #[error("field '{field}' not found in source schema")]
    SchemaFieldNotFound { field: String },

    #[error("source exhausted after {fetched} of {expected} expected rows for field '{field}'")]
    UnexpectedExhaustion {
        field: String,
        expected: usize,
        fetched: usize,
    },

    #[error("field '{field}' row {position}: expected {expected:?}, got {actual:?}")]
    ValueMismatch {
        field: String,
        position: usize,
        expected: Value,
        actual: Value,
    },
}

impl VerifyError {
    /// Discriminant-only projection reported to the obs sink.
    #[must_use]
    pub const fn outcome(&self) -> VerifyOutcome {
        match self {
            Self::ExtraRowsPresent { .. } => VerifyOutcome::ExtraRows,
            Self::SchemaFieldNotFound { .. } => VerifyOutcome::FieldNotFound,
            Self::UnexpectedExhaustion { .. } => VerifyOutcome::Exhausted,
            Self::ValueMismatch { .. } => VerifyOutcome::Mismatch,
        }
    }
}

///
/// VerifyOptions
///
/// Per-call comparison configuration. Always passed explicitly; there is
/// no process-global verification state.
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct VerifyOptions {
    /// Absolute tolerance applied to real-valued columns; exact when unset.
    pub real_tolerance: Option<f64>,
}

/// Verify one column of a result cursor against an expected ordered sequence.
///
/// Consumes exactly `expected.len()` rows, then probes the source once more
/// to confirm exhaustion. The cursor advances monotonically and is never
/// rewound, so a second call on the same source sees the remainder, not the
/// sequence again.
pub fn verify_column<S, V>(source: &mut S, field: &str, expected: &[V]) -> Result<(), VerifyError>
where
    S: RowSource + ?Sized,
    V: FieldValue,
{
    verify_column_with(source, field, expected, &VerifyOptions::default())
}

/// [`verify_column`] with explicit comparison options.
pub fn verify_column_with<S, V>(
    source: &mut S,
    field: &str,
    expected: &[V],
    options: &VerifyOptions,
) -> Result<(), VerifyError>
where
    S: RowSource + ?Sized,
    V: FieldValue,
{
    obs::emit(&VerifyEvent::VerifyStarted {
        field: field.to_string(),
    });

    let result = run(source, field, expected, options);

    let outcome = match &result {
        Ok(()) => VerifyOutcome::Passed,
        Err(err) => err.outcome(),
    };
    obs::emit(&VerifyEvent::VerifyFinished {
        field: field.to_string(),
        outcome,
    });

    result
}

fn run<S, V>(
    source: &mut S,
    field: &str,
    expected: &[V],
    options: &VerifyOptions,
) -> Result<(), VerifyError>
where
    S: RowSource + ?Sized,
    V: FieldValue,
{
    let Some(field_ref) = source.schema().resolve(field) else {
        return Err(VerifyError::SchemaFieldNotFound {
            field: field.to_string(),
        });
    };

    for (position, item) in expected.iter().enumerate() {
        let Some(feature) = source.next_feature() else {
            return Err(VerifyError::UnexpectedExhaustion {
                field: field.to_string(),
                expected: expected.len(),
                fetched: position,
            });
        };

        // Row ownership ends here; only the compared value survives.
        let actual = feature.value(field_ref).clone();
        drop(feature);

        let expected_value = item.to_value();
        let equal = eq_with_tolerance(&expected_value, &actual, options.real_tolerance);
        obs::emit(&VerifyEvent::RowCompared { position });

        if equal != Some(true) {
            return Err(VerifyError::ValueMismatch {
                field: field.to_string(),
                position,
                expected: expected_value,
                actual,
            });
        }
    }

    // The source must be exhausted once the expected rows are consumed.
    if source.next_feature().is_some() {
        return Err(VerifyError::ExtraRowsPresent {
            field: field.to_string(),
            expected: expected.len(),
        });
    }

    Ok(())
}
