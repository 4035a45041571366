use crate::{
    dataset::DatasetError,
    feature::FeatureError,
    geometry::GeometryError,
    predicate::PredicateError,
    schema::SchemaError,
    verify::{PairedVerifyError, VerifyError},
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level aggregate over the module error taxonomies. Scenario code
/// that drives several modules through `?` lands here.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    DatasetError(#[from] DatasetError),

    #[error(transparent)]
    FeatureError(#[from] FeatureError),

    #[error(transparent)]
    GeometryError(#[from] GeometryError),

    #[error(transparent)]
    PairedVerifyError(#[from] PairedVerifyError),

    #[error(transparent)]
    PredicateError(#[from] PredicateError),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error(transparent)]
    VerifyError(#[from] VerifyError),
}
