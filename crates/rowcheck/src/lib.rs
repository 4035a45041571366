//! ## Crate layout
//! - `core`: runtime value model, schemas, cursors, predicates, the
//!   result-set verifier, and observability.
//!
//! The `prelude` module mirrors the surface used inside scenario code.

pub use rowcheck_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rowcheck_core::Error;

///
/// Scenario Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        cursor::{Rewind as _, RowSource as _, VecCursor},
        dataset::{Dataset, Layer},
        feature::Feature,
        geometry::{Geometry, GeometryMatcher as _, TokenMatcher},
        obs,
        predicate::{CompareOp, ComparePredicate, Predicate},
        schema::{FieldDef, FieldKind, FieldRef, LayerSchema},
        value::{FieldValue as _, Real, Value, ValueKind},
        verify::{
            PairedVerifyError, VerifyError, VerifyOptions, verify_column, verify_column_with,
            verify_paired,
        },
    };
    pub use serde::{Deserialize, Serialize};
}
