//! Core runtime for Rowcheck: the typed value model, layer schemas, row
//! cursors, attribute predicates, the result-set verifier, and the
//! ergonomics exported via the `prelude`.

// public exports are one module level down
pub mod cursor;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod obs;
pub mod predicate;
pub mod schema;
pub mod value;
pub mod verify;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// CONSTANTS
///

/// Maximum number of fields allowed on a layer schema.
///
/// Attribute tables in the dBASE-derived formats this harness verifies cap
/// out at 255 columns; the bound keeps resolved field indexes small and
/// sizing tests simple.
pub const MAX_FIELD_COUNT: usize = 255;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        cursor::{Rewind, RowSource, VecCursor},
        dataset::{Dataset, Layer},
        feature::Feature,
        geometry::{Geometry, GeometryMatcher, TokenMatcher},
        predicate::{CompareOp, ComparePredicate, Predicate},
        schema::{FieldDef, FieldKind, FieldRef, LayerSchema},
        value::{FieldValue, Real, Value, ValueKind},
    };
}
