//! Observability: verification telemetry and sink abstractions.
//!
//! The verifier never touches counter state directly; every signal flows
//! through [`VerifyEvent`] and the sink boundary.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{MetricsState, metrics_reset, metrics_snapshot};
pub use sink::{EventSink, VerifyEvent, VerifyOutcome, with_sink};

pub(crate) use sink::emit;
