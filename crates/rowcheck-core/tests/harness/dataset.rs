use crate::fixtures::{EAS_IDS_FILE_ORDER, POLY_LAYER, poly_schema, seeded_dataset};
use rowcheck_core::{
    dataset::{Dataset, DatasetError},
    feature::Feature,
    prelude::*,
    verify::verify_column,
};

#[test]
fn create_empty_dataset() {
    let dataset = Dataset::new("tmp");

    assert_eq!(dataset.name(), "tmp");
    assert_eq!(dataset.layer_count(), 0);
    assert!(dataset.layer_at(0).is_none());
}

#[test]
fn create_table_declares_three_fields() {
    let mut dataset = Dataset::new("tmp");
    let layer = dataset
        .create_layer(POLY_LAYER, poly_schema())
        .expect("layer created");

    assert_eq!(layer.schema().field_count(), 3);
    assert_eq!(layer.feature_count(), 0);
}

#[test]
fn duplicate_layer_names_rejected() {
    let mut dataset = Dataset::new("tmp");
    dataset
        .create_layer(POLY_LAYER, poly_schema())
        .expect("first layer");

    let err = dataset
        .create_layer(POLY_LAYER, poly_schema())
        .expect_err("duplicate name");
    assert!(matches!(err, DatasetError::DuplicateLayer { name } if name == POLY_LAYER));
}

#[test]
fn copy_rows_between_layers() {
    let source = seeded_dataset();
    let source_layer = source.layer_at(0).expect("seeded layer");

    let mut dest = Dataset::new("copy");
    let dest_layer = dest
        .create_layer(POLY_LAYER, source_layer.schema().clone())
        .expect("dest layer");

    let mut reader = source_layer.reader();
    while let Some(feature) = reader.next_feature() {
        dest_layer.append(feature).expect("copied row fits schema");
    }

    let dest_layer = dest.layer(POLY_LAYER).expect("dest layer");
    assert_eq!(dest_layer.feature_count(), 10);

    let mut reader = dest_layer.reader();
    verify_column(&mut reader, "eas_id", &EAS_IDS_FILE_ORDER).expect("copy preserves order");
}

#[test]
fn append_rejects_rows_that_do_not_fit() {
    let mut dataset = Dataset::new("tmp");
    let layer = dataset
        .create_layer(POLY_LAYER, poly_schema())
        .expect("layer created");

    let short = Feature::blank(
        &LayerSchema::new(vec![FieldDef::new("EAS_ID", FieldKind::Integer)]).expect("schema"),
    );
    let err = layer.append(short).expect_err("wrong arity");
    assert!(matches!(err, DatasetError::FeatureRejected { .. }));
}

#[test]
fn drop_layer_removes_by_name() {
    let mut dataset = seeded_dataset();

    assert!(matches!(
        dataset.drop_layer("missing"),
        Err(DatasetError::LayerNotFound { .. })
    ));

    dataset.drop_layer(POLY_LAYER).expect("layer exists");
    assert_eq!(dataset.layer_count(), 0);
}
