mod eval;
mod validate;


use crate::value::Value;
use serde::Serialize;
use std::ops::{BitAnd, BitOr};

// re-exports
pub use eval::matches;
pub use validate::{PredicateError, validate};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of attribute filters. There is no
/// string parsing and no execution logic here; interpretation happens in
/// later passes:
///
/// - validation (schema-aware)
/// - row evaluation
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Predicate {
    True,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull { field: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }
}

impl From<ComparePredicate> for Predicate {
    fn from(cmp: ComparePredicate) -> Self {
        Self::Compare(cmp)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::Or(vec![self, rhs])
    }
}
