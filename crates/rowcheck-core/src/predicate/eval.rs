use crate::{
    feature::Feature,
    predicate::{CompareOp, ComparePredicate, Predicate},
    schema::LayerSchema,
    value::{Value, strict_eq, strict_order_cmp},
};
use std::cmp::Ordering;

/// Evaluate a validated predicate against one row.
///
/// Unresolved fields and null row values never satisfy a comparison; only
/// `IsNull` matches a null.
#[must_use]
pub fn matches(predicate: &Predicate, schema: &LayerSchema, feature: &Feature) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::And(preds) => preds.iter().all(|p| matches(p, schema, feature)),
        Predicate::Or(preds) => preds.iter().any(|p| matches(p, schema, feature)),
        Predicate::Not(inner) => !matches(inner, schema, feature),
        Predicate::Compare(cmp) => matches_compare(cmp, schema, feature),
        Predicate::IsNull { field } => schema
            .resolve(field)
            .is_some_and(|field_ref| feature.value(field_ref).is_null()),
    }
}

fn matches_compare(cmp: &ComparePredicate, schema: &LayerSchema, feature: &Feature) -> bool {
    let Some(field_ref) = schema.resolve(&cmp.field) else {
        return false;
    };

    let actual = feature.value(field_ref);
    if actual.is_null() {
        return false;
    }

    match cmp.op {
        CompareOp::Eq => strict_eq(actual, &cmp.value) == Some(true),
        CompareOp::Ne => strict_eq(actual, &cmp.value) == Some(false),
        CompareOp::Lt => ordered(actual, &cmp.value, Ordering::is_lt),
        CompareOp::Lte => ordered(actual, &cmp.value, Ordering::is_le),
        CompareOp::Gt => ordered(actual, &cmp.value, Ordering::is_gt),
        CompareOp::Gte => ordered(actual, &cmp.value, Ordering::is_ge),
    }
}

fn ordered(left: &Value, right: &Value, test: impl FnOnce(Ordering) -> bool) -> bool {
    strict_order_cmp(left, right).is_some_and(test)
}
