//! The canonical polygon table: three attribute columns and one polygon
//! geometry per row, seeded in file order.

use rowcheck_core::prelude::*;

pub const POLY_LAYER: &str = "tpoly";

/// `eas_id` values in seeded row order.
pub const EAS_IDS_FILE_ORDER: [i64; 10] = [168, 179, 171, 173, 172, 169, 166, 158, 165, 170];

/// `eas_id` values surviving the `eas_id < 170` filter, in row order.
pub const EAS_IDS_UNDER_170: [i64; 5] = [168, 169, 166, 158, 165];

/// Distinct `eas_id` values in descending order.
pub const EAS_IDS_DISTINCT_DESC: [i64; 10] = [179, 173, 172, 171, 170, 169, 168, 166, 165, 158];

/// The parcel code whose polygon is pinned below.
pub const CANON_PRFEDEA: &str = "35043413";

pub const CANON_WKT: &str = "POLYGON ((479750.688 4764702.000,479658.594 4764670.000,\
                             479640.094 4764721.000,479735.906 4764752.000,\
                             479750.688 4764702.000))";

const ROWS: [(f64, i64, &str); 10] = [
    (215_229.266, 168, "35043411"),
    (247_328.172, 179, "35043412"),
    (261_752.781, 171, "35043414"),
    (547_597.188, 173, "35043416"),
    (15_775.758, 172, "35043415"),
    (101_429.977, 169, "35043417"),
    (268_597.625, 166, "35043418"),
    (1_634_833.375, 158, "35043369"),
    (596_610.313, 165, "35043421"),
    (5_268.813, 170, CANON_PRFEDEA),
];

pub fn poly_schema() -> LayerSchema {
    LayerSchema::new(vec![
        FieldDef::new("AREA", FieldKind::Real),
        FieldDef::new("EAS_ID", FieldKind::Integer),
        FieldDef::new("PRFEDEA", FieldKind::Text),
    ])
    .expect("fixture schema is valid")
}

/// A dataset holding the fully seeded polygon layer.
pub fn seeded_dataset() -> Dataset {
    let mut dataset = Dataset::new("tmp");
    let layer = dataset
        .create_layer(POLY_LAYER, poly_schema())
        .expect("fresh dataset has no layers");

    let schema = layer.schema().clone();
    for (area, eas_id, prfedea) in ROWS {
        layer
            .append(poly_row(&schema, area, eas_id, prfedea))
            .expect("fixture row matches schema");
    }

    dataset
}

pub fn poly_row(schema: &LayerSchema, area: f64, eas_id: i64, prfedea: &str) -> Feature {
    let area = Real::try_new(area).expect("finite area");
    let wkt = if prfedea == CANON_PRFEDEA {
        CANON_WKT.to_string()
    } else {
        parcel_square(eas_id)
    };

    Feature::from_values(
        schema,
        vec![Value::Real(area), Value::Int(eas_id), Value::from(prfedea)],
    )
    .expect("fixture row matches schema")
    .with_geometry(Geometry::from_wkt(wkt).expect("fixture wkt is non-empty"))
}

// Distinct square per parcel, keyed off the id so rows stay distinguishable.
fn parcel_square(eas_id: i64) -> String {
    let x = 479_000 + eas_id * 10;
    let y = 4_763_000 + eas_id * 10;

    format!(
        "POLYGON (({x} {y},{x} {},{} {},{} {y},{x} {y}))",
        y + 50,
        x + 50,
        y + 50,
        x + 50,
    )
}
