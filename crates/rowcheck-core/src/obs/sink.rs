//! Event sink boundary.
//!
//! Verification logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through VerifyEvent and EventSink.
//!
//! This module is the only allowed bridge between the verifier and the
//! process-local metrics state.

use crate::obs::metrics;
use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn EventSink>> = const { RefCell::new(None) };
}

///
/// VerifyOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum VerifyOutcome {
    Passed,
    FieldNotFound,
    Exhausted,
    Mismatch,
    ExtraRows,
}

///
/// VerifyEvent
///

#[derive(Clone, Debug)]
pub enum VerifyEvent {
    VerifyStarted {
        field: String,
    },
    RowCompared {
        position: usize,
    },
    VerifyFinished {
        field: String,
        outcome: VerifyOutcome,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &VerifyEvent);
}

/// GlobalEventSink
/// Default process-local sink that writes into thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalEventSink;

impl EventSink for GlobalEventSink {
    fn record(&self, event: &VerifyEvent) {
        match event {
            VerifyEvent::VerifyStarted { .. } => {
                metrics::with_state_mut(|m| m.verifications_started += 1);
            }
            VerifyEvent::RowCompared { .. } => {
                metrics::with_state_mut(|m| m.rows_compared += 1);
            }
            VerifyEvent::VerifyFinished { outcome, .. } => {
                metrics::with_state_mut(|m| m.record_outcome(*outcome));
            }
        }
    }
}

/// Route an event to the scoped sink if one is installed, else the global
/// metrics sink.
pub(crate) fn emit(event: &VerifyEvent) {
    let scoped = SINK_OVERRIDE.with(|cell| *cell.borrow());

    match scoped {
        // Pointer installed by `with_sink`, which keeps the sink alive for
        // the duration of the scope.
        Some(ptr) => unsafe { (*ptr).record(event) },
        None => GlobalEventSink.record(event),
    }
}

/// Install `sink` as this thread's event sink for the duration of `f`.
pub fn with_sink<R>(sink: &dyn EventSink, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<*const dyn EventSink>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = self.0);
        }
    }

    // Erase the borrow's lifetime: the pointer is only ever dereferenced by
    // `emit` while this scope is live (see the safety note there) and is
    // cleared by `Restore::drop` before `sink` can dangle.
    let ptr: *const dyn EventSink =
        unsafe { std::mem::transmute::<&dyn EventSink, *const dyn EventSink>(sink) };
    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(ptr));
    let _restore = Restore(previous);

    f()
}
