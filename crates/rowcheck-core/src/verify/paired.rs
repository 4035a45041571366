use crate::{cursor::RowSource, feature::Feature};
use thiserror::Error as ThisError;

///
/// PairedVerifyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PairedVerifyError {
    #[error("sources disagree on length: left yielded {left} rows, right yielded {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("paired rows differ at position {position}")]
    RowMismatch { position: usize },
}

/// Walk two cursors in lockstep, applying a caller-supplied row comparator.
///
/// The comparator is the seam where geometry equality is delegated to the
/// external engine, typically a [`GeometryMatcher`] invoked with a
/// tolerance. Returns the number of row pairs compared. Both in-flight
/// rows drop on every exit path.
///
/// [`GeometryMatcher`]: crate::geometry::GeometryMatcher
pub fn verify_paired<L, R, F>(
    left: &mut L,
    right: &mut R,
    mut cmp: F,
) -> Result<usize, PairedVerifyError>
where
    L: RowSource + ?Sized,
    R: RowSource + ?Sized,
    F: FnMut(&Feature, &Feature, usize) -> bool,
{
    let mut compared = 0;

    loop {
        match (left.next_feature(), right.next_feature()) {
            (None, None) => return Ok(compared),
            (Some(a), Some(b)) => {
                if !cmp(&a, &b, compared) {
                    return Err(PairedVerifyError::RowMismatch { position: compared });
                }
                compared += 1;
            }
            (lhs, rhs) => {
                return Err(PairedVerifyError::LengthMismatch {
                    left: compared + usize::from(lhs.is_some()),
                    right: compared + usize::from(rhs.is_some()),
                });
            }
        }
    }
}
