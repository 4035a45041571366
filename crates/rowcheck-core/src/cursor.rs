use crate::{feature::Feature, schema::LayerSchema};

///
/// RowSource
///
/// Capability seam over a live result cursor: a resolvable schema plus
/// fetch-next-or-exhausted. Verification borrows a source exclusively and
/// advances it monotonically; there is no implicit rewind.
///

pub trait RowSource {
    /// Schema shared by every row this source yields.
    fn schema(&self) -> &LayerSchema;

    /// Fetch the next row, or `None` once the source is exhausted.
    fn next_feature(&mut self) -> Option<Feature>;
}

///
/// Rewind
///
/// Optional capability for sources that can restart from the first row.
///

pub trait Rewind: RowSource {
    fn rewind(&mut self);
}

///
/// VecCursor
///
/// In-memory source over owned features. Rows must be positionally aligned
/// with the schema; dataset layers enforce that on append.
///

#[derive(Clone, Debug)]
pub struct VecCursor {
    schema: LayerSchema,
    features: Vec<Feature>,
    pos: usize,
}

impl VecCursor {
    #[must_use]
    pub const fn new(schema: LayerSchema, features: Vec<Feature>) -> Self {
        Self {
            schema,
            features,
            pos: 0,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.features.len().saturating_sub(self.pos)
    }
}

impl RowSource for VecCursor {
    fn schema(&self) -> &LayerSchema {
        &self.schema
    }

    fn next_feature(&mut self) -> Option<Feature> {
        let feature = self.features.get(self.pos).cloned()?;
        self.pos += 1;

        Some(feature)
    }
}

impl Rewind for VecCursor {
    fn rewind(&mut self) {
        self.pos = 0;
    }
}
