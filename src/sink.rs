//! Error sinks
//!
//! Every error the engine produces is reported to an injected sink under a
//! single stable tag before `interpolate` returns `None`. The default sink
//! forwards to `tracing`; [`MemorySink`] records reports for inspection,
//! which is what most embedders and tests want.

use crate::core::error::InterpolationError;
use parking_lot::Mutex;
use tracing::error;

/// Receiver for engine-originated error reports
pub trait ErrorSink: Send + Sync {
    /// Report an error under the engine's log tag
    fn report(&self, tag: &str, error: &InterpolationError);
}

/// Adapter that lets a plain closure act as a sink
pub struct FnSink<F>(pub F);

impl<F> ErrorSink for FnSink<F>
where
    F: Fn(&str, &InterpolationError) + Send + Sync,
{
    fn report(&self, tag: &str, error: &InterpolationError) {
        (self.0)(tag, error)
    }
}

/// Sink that forwards reports to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, tag: &str, error: &InterpolationError) {
        error!(tag, %error, "interpolation failed");
    }
}

/// Sink that records reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(String, InterpolationError)>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded reports, oldest first
    pub fn records(&self) -> Vec<(String, InterpolationError)> {
        self.records.lock().clone()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drain all recorded reports
    pub fn take(&self) -> Vec<(String, InterpolationError)> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl ErrorSink for MemorySink {
    fn report(&self, tag: &str, error: &InterpolationError) {
        self.records.lock().push((tag.to_string(), error.clone()));
    }
}
