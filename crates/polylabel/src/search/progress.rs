//! Progress events emitted by the search.
//!
//! Observers only see copies of scalar data; they have no access to the queue
//! or the best cell and cannot change the outcome.

use std::fmt;

/// Something worth reporting during a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressEvent {
    /// A better cell was found. `distance` is rounded to 4 decimals.
    Improved { distance: f64, probes: usize },
    /// The loop ended (converged or stopped by a limit).
    Finished { probes: usize, distance: f64 },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Improved { distance, probes } => {
                write!(f, "found best {distance} after {probes} probes")
            }
            Self::Finished { probes, distance } => {
                write!(f, "num probes: {probes}; best distance: {distance}")
            }
        }
    }
}

/// Sink for progress events.
pub trait Observer {
    fn event(&mut self, event: &ProgressEvent);
}

impl<F: FnMut(&ProgressEvent)> Observer for F {
    #[inline]
    fn event(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Observer that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn event(&mut self, _event: &ProgressEvent) {}
}
