use crate::fixtures::{EAS_IDS_UNDER_170, POLY_LAYER, seeded_dataset};
use rowcheck_core::{
    obs::{metrics_reset, metrics_snapshot},
    prelude::*,
    verify::verify_column,
};

#[test]
fn scenario_outcomes_reach_the_counters() {
    metrics_reset();

    let dataset = seeded_dataset();
    let layer = dataset.layer(POLY_LAYER).expect("seeded layer");

    let filter = Predicate::from(ComparePredicate::lt("eas_id", Value::Int(170)));

    let mut reader = layer.filtered_reader(&filter).expect("filter validates");
    verify_column(&mut reader, "eas_id", &EAS_IDS_UNDER_170).expect("passes");

    let mut reader = layer.filtered_reader(&filter).expect("filter validates");
    verify_column(&mut reader, "eas_id", &[1i64, 2, 3, 4, 5]).expect_err("mismatch");

    let snapshot = metrics_snapshot();
    assert_eq!(snapshot.verifications_started, 2);
    assert_eq!(snapshot.verifications_passed, 1);
    assert_eq!(snapshot.verifications_failed, 1);
    assert_eq!(snapshot.failures_mismatch, 1);
    // five matching rows plus the first mismatching one
    assert_eq!(snapshot.rows_compared, 6);
}
