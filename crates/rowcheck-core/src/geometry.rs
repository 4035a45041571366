use serde::Serialize;
use thiserror::Error as ThisError;

///
/// Geometry
///
/// Opaque geometry payload carried per feature. The token is well-known
/// text held verbatim; rowcheck never interprets coordinates. Comparison
/// happens only through a [`GeometryMatcher`].
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Geometry {
    wkt: String,
}

impl Geometry {
    /// Wrap a well-known-text token. Rejects empty input only; syntax is
    /// the producing engine's concern.
    pub fn from_wkt(wkt: impl Into<String>) -> Result<Self, GeometryError> {
        let wkt = wkt.into();
        if wkt.trim().is_empty() {
            return Err(GeometryError::EmptyWkt);
        }

        Ok(Self { wkt })
    }

    #[must_use]
    pub fn as_wkt(&self) -> &str {
        &self.wkt
    }
}

///
/// GeometryError
///

#[derive(Debug, ThisError)]
pub enum GeometryError {
    #[error("geometry token is empty")]
    EmptyWkt,
}

///
/// GeometryMatcher
///
/// Boundary to the external geometry engine. Approximate equality under a
/// numeric tolerance is the collaborator's responsibility; rowcheck only
/// routes the call.
///

pub trait GeometryMatcher {
    fn approx_equal(&self, left: &Geometry, right: &Geometry, tolerance: f64) -> bool;
}

///
/// TokenMatcher
///
/// Fixture-grade matcher: equality of whitespace-normalized tokens. The
/// tolerance is ignored; geometric comparison belongs to a real engine
/// behind the trait.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TokenMatcher;

impl GeometryMatcher for TokenMatcher {
    fn approx_equal(&self, left: &Geometry, right: &Geometry, _tolerance: f64) -> bool {
        normalized(left.as_wkt()) == normalized(right.as_wkt())
    }
}

fn normalized(wkt: &str) -> String {
    wkt.split_whitespace().collect::<Vec<_>>().join(" ")
}
