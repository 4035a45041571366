use crate::{
    cursor::VecCursor,
    feature::{Feature, FeatureError},
    predicate::{self, Predicate, PredicateError},
    schema::LayerSchema,
};
use thiserror::Error as ThisError;

///
/// DatasetError
///

#[derive(Debug, ThisError)]
pub enum DatasetError {
    #[error("dataset already contains a layer named '{name}'")]
    DuplicateLayer { name: String },

    #[error("feature rejected by layer '{layer}': {source}")]
    FeatureRejected {
        layer: String,
        source: FeatureError,
    },

    #[error("no layer named '{name}' in dataset")]
    LayerNotFound { name: String },
}

///
/// Dataset
///
/// Named, ordered collection of in-memory layers. Stand-in for the
/// external datasource surface the verification scenarios drive; not a
/// storage engine.
///

#[derive(Clone, Debug)]
pub struct Dataset {
    name: String,
    layers: Vec<Layer>,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Create a layer with the given schema. Layer names are unique per
    /// dataset.
    pub fn create_layer(
        &mut self,
        name: impl Into<String>,
        schema: LayerSchema,
    ) -> Result<&mut Layer, DatasetError> {
        let name = name.into();
        if self.layers.iter().any(|l| l.name == name) {
            return Err(DatasetError::DuplicateLayer { name });
        }

        self.layers.push(Layer::new(name, schema));
        let index = self.layers.len() - 1;

        Ok(&mut self.layers[index])
    }

    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    #[must_use]
    pub fn layer_at(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn drop_layer(&mut self, name: &str) -> Result<(), DatasetError> {
        let Some(index) = self.layers.iter().position(|l| l.name == name) else {
            return Err(DatasetError::LayerNotFound {
                name: name.to_string(),
            });
        };
        self.layers.remove(index);

        Ok(())
    }
}

///
/// Layer
///
/// One table: a schema plus appended features. Readers snapshot the layer
/// at creation time; each reader is an independent cursor over its own
/// copy of the matching rows.
///

#[derive(Clone, Debug)]
pub struct Layer {
    name: String,
    schema: LayerSchema,
    features: Vec<Feature>,
}

impl Layer {
    const fn new(name: String, schema: LayerSchema) -> Self {
        Self {
            name,
            schema,
            features: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn schema(&self) -> &LayerSchema {
        &self.schema
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Append a feature; arity and field kinds are checked against the
    /// layer schema.
    pub fn append(&mut self, feature: Feature) -> Result<(), DatasetError> {
        feature
            .check_against(&self.schema)
            .map_err(|source| DatasetError::FeatureRejected {
                layer: self.name.clone(),
                source,
            })?;
        self.features.push(feature);

        Ok(())
    }

    /// Unfiltered cursor over a snapshot of the current features.
    #[must_use]
    pub fn reader(&self) -> VecCursor {
        VecCursor::new(self.schema.clone(), self.features.clone())
    }

    /// Cursor over the features matching `predicate`. The predicate is
    /// validated against the layer schema before any row is read.
    pub fn filtered_reader(&self, predicate: &Predicate) -> Result<VecCursor, PredicateError> {
        predicate::validate(predicate, &self.schema)?;

        let features = self
            .features
            .iter()
            .filter(|f| predicate::matches(predicate, &self.schema, f))
            .cloned()
            .collect();

        Ok(VecCursor::new(self.schema.clone(), features))
    }
}
