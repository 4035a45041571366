use derive_more::Display;
use serde::Serialize;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Real
///
/// Finite f64 only; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Real(f64);

impl Real {
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    #[must_use]
    pub fn try_new(v: f64) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Some(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Absolute difference, used for tolerance comparisons.
    #[must_use]
    pub fn abs_diff(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

#[derive(Debug, ThisError)]
pub enum RealError {
    #[error("non-finite real payload")]
    NonFinite,
}

impl TryFrom<f64> for Real {
    type Error = RealError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(RealError::NonFinite)
    }
}

impl Eq for Real {}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        // finite-only and -0.0 canonicalized, so total_cmp agrees with ==
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
