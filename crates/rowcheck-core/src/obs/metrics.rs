use crate::obs::sink::VerifyOutcome;
use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

///
/// MetricsState
///
/// Thread-local verification counters behind the sink boundary. Cloned out
/// as a point-in-time snapshot; reset is explicit.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsState {
    pub verifications_started: u64,
    pub verifications_passed: u64,
    pub verifications_failed: u64,
    pub rows_compared: u64,
    pub failures_field_not_found: u64,
    pub failures_exhausted: u64,
    pub failures_mismatch: u64,
    pub failures_extra_rows: u64,
}

impl MetricsState {
    pub(crate) const fn record_outcome(&mut self, outcome: VerifyOutcome) {
        match outcome {
            VerifyOutcome::Passed => self.verifications_passed += 1,
            VerifyOutcome::FieldNotFound => {
                self.verifications_failed += 1;
                self.failures_field_not_found += 1;
            }
            VerifyOutcome::Exhausted => {
                self.verifications_failed += 1;
                self.failures_exhausted += 1;
            }
            VerifyOutcome::Mismatch => {
                self.verifications_failed += 1;
                self.failures_mismatch += 1;
            }
            VerifyOutcome::ExtraRows => {
                self.verifications_failed += 1;
                self.failures_extra_rows += 1;
            }
        }
    }
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsState) -> R) -> R {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Point-in-time snapshot of this thread's verification counters.
#[must_use]
pub fn metrics_snapshot() -> MetricsState {
    STATE.with(|cell| cell.borrow().clone())
}

/// Reset all counters to zero.
pub fn metrics_reset() {
    STATE.with(|cell| *cell.borrow_mut() = MetricsState::default());
}
