use crate::fixtures::{EAS_IDS_DISTINCT_DESC, EAS_IDS_UNDER_170, POLY_LAYER, seeded_dataset};
use rowcheck_core::{
    predicate::PredicateError,
    prelude::*,
    verify::{VerifyError, verify_column},
};

#[test]
fn attribute_filter_keeps_row_order() {
    let dataset = seeded_dataset();
    let layer = dataset.layer(POLY_LAYER).expect("seeded layer");

    let filter = Predicate::from(ComparePredicate::lt("eas_id", Value::Int(170)));
    let mut reader = layer.filtered_reader(&filter).expect("filter validates");

    verify_column(&mut reader, "eas_id", &EAS_IDS_UNDER_170).expect("filtered rows match");
}

#[test]
fn wrong_expectation_is_caught() {
    let dataset = seeded_dataset();
    let layer = dataset.layer(POLY_LAYER).expect("seeded layer");

    let filter = Predicate::from(ComparePredicate::lt("eas_id", Value::Int(170)));
    let mut reader = layer.filtered_reader(&filter).expect("filter validates");

    // same members, wrong order
    let err = verify_column(&mut reader, "eas_id", &[168i64, 166, 169, 158, 165])
        .expect_err("order matters");
    assert!(matches!(err, VerifyError::ValueMismatch { position: 1, .. }));
}

#[test]
fn distinct_descending_projection_verifies() {
    // the seeded ids, deduplicated and sorted descending, as a result layer
    let mut dataset = Dataset::new("query");
    let schema = LayerSchema::new(vec![FieldDef::new("EAS_ID", FieldKind::Integer)])
        .expect("result schema");
    let layer = dataset
        .create_layer("distinct_eas_id", schema.clone())
        .expect("result layer");

    for id in EAS_IDS_DISTINCT_DESC {
        layer
            .append(Feature::from_values(&schema, vec![Value::Int(id)]).expect("row fits"))
            .expect("row appended");
    }

    let mut reader = dataset.layer("distinct_eas_id").expect("layer").reader();
    verify_column(&mut reader, "eas_id", &EAS_IDS_DISTINCT_DESC).expect("projection matches");
}

#[test]
fn filters_are_validated_before_reading() {
    let dataset = seeded_dataset();
    let layer = dataset.layer(POLY_LAYER).expect("seeded layer");

    let filter = Predicate::from(ComparePredicate::lt("no_such", Value::Int(170)));
    let err = layer.filtered_reader(&filter).expect_err("unknown field");
    assert!(matches!(err, PredicateError::UnknownField { field } if field == "no_such"));

    let filter = Predicate::from(ComparePredicate::eq("eas_id", Value::from("170")));
    let err = layer.filtered_reader(&filter).expect_err("kind mismatch");
    assert!(matches!(err, PredicateError::OperandKindMismatch { .. }));
}

#[test]
fn nulled_feature_reads_back_without_geometry() {
    let mut dataset = seeded_dataset();
    let layer = dataset.layer_mut(POLY_LAYER).expect("seeded layer");
    let schema = layer.schema().clone();

    // write: only the parcel code set, no geometry attached
    let mut feature = Feature::blank(&schema);
    let prfedea = schema.resolve("PRFEDEA").expect("resolves");
    feature.set(prfedea, Value::from("nulled")).expect("text fits");
    layer.append(feature).expect("row appended");

    // read back through the equality filter
    let filter = Predicate::from(ComparePredicate::eq("prfedea", Value::from("nulled")));
    let mut reader = layer.filtered_reader(&filter).expect("filter validates");

    let found = reader.next_feature().expect("one row matches");
    assert!(found.geometry().is_none());
    assert!(found.value(schema.resolve("eas_id").expect("resolves")).is_null());
    drop(found);
    assert!(reader.next_feature().is_none());

    // the verifier agrees, on a fresh cursor
    let mut reader = layer.filtered_reader(&filter).expect("filter validates");
    verify_column(&mut reader, "prfedea", &["nulled"]).expect("single nulled row");

    let mut reader = layer.filtered_reader(&filter).expect("filter validates");
    verify_column(&mut reader, "eas_id", &[None::<i64>]).expect("unset id reads as null");
}
