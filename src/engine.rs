//! Interpolation engine
//!
//! Ties the pipeline together: scan the template into segments, evaluate
//! each `{{ … }}` span, and concatenate. The engine is re-entrant and holds
//! no per-call state; the only side effect is reporting errors to the
//! injected sink.

use crate::context::DataContext;
use crate::core::error::InterpolationResult;
use crate::eval::Evaluator;
use crate::scanner::{self, Segment};
use crate::sink::{ErrorSink, TracingSink};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, trace};

/// Tag under which all engine errors are reported to the sink
pub const LOG_TAG: &str = "Interpolator";

/// String interpolation engine
pub struct Interpolator {
    evaluator: Evaluator,
    sink: Arc<dyn ErrorSink>,
}

impl Interpolator {
    /// Create an engine that reports errors through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Create an engine with a caller-supplied error sink
    pub fn with_sink(sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            evaluator: Evaluator::default(),
            sink,
        }
    }

    /// Interpolate a template against a data context.
    ///
    /// Returns the fully substituted template, or `None` after reporting
    /// the failure to the sink. A single failing span fails the whole
    /// call; nothing is partially substituted.
    pub fn interpolate(&self, template: &str, context: &DataContext) -> Option<String> {
        match self.try_interpolate(template, context) {
            Ok(output) => Some(output),
            Err(error) => {
                debug!(template, %error, "template evaluation failed");
                self.sink.report(LOG_TAG, &error);
                None
            }
        }
    }

    /// Interpolate a template, surfacing the error to the caller instead
    /// of the sink
    pub fn try_interpolate(
        &self,
        template: &str,
        context: &DataContext,
    ) -> InterpolationResult<String> {
        trace!(template, "interpolating template");

        let mut output = String::with_capacity(template.len());
        for segment in scanner::scan(template) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Expression(expression) => {
                    output.push_str(&self.evaluator.evaluate(expression, context)?);
                }
            }
        }

        Ok(output)
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpolate with a process-wide default engine.
///
/// Equivalent to [`Interpolator::interpolate`] on an engine whose sink is
/// [`TracingSink`].
pub fn interpolate(template: &str, context: &DataContext) -> Option<String> {
    static ENGINE: Lazy<Interpolator> = Lazy::new(Interpolator::new);
    ENGINE.interpolate(template, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextValue;
    use crate::core::error::InterpolationError;
    use crate::sink::{FnSink, MemorySink};
    use std::collections::HashMap;

    fn context() -> DataContext {
        let mut user = HashMap::new();
        user.insert("name".to_string(), ContextValue::from("George"));
        DataContext::builder().user(user).build()
    }

    #[test]
    fn test_literal_template_passes_through() {
        let engine = Interpolator::new();
        let result = engine.interpolate("no expressions here", &context());
        assert_eq!(result.as_deref(), Some("no expressions here"));
    }

    #[test]
    fn test_single_span() {
        let engine = Interpolator::new();
        let result = engine.interpolate("Hello {{user.name}}!", &context());
        assert_eq!(result.as_deref(), Some("Hello George!"));
    }

    #[test]
    fn test_orphan_opener_passes_through() {
        let engine = Interpolator::new();
        let result = engine.interpolate("{{user.name", &context());
        assert_eq!(result.as_deref(), Some("{{user.name"));
    }

    #[test]
    fn test_error_reports_to_sink_and_returns_none() {
        let sink = Arc::new(MemorySink::new());
        let engine = Interpolator::with_sink(Arc::clone(&sink) as Arc<dyn ErrorSink>);

        let result = engine.interpolate("{{user.userid}}", &DataContext::new());
        assert_eq!(result, None);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, LOG_TAG);
        assert_eq!(
            records[0].1,
            InterpolationError::UnexpectedValue {
                value: "user.userid".to_string(),
            }
        );
    }

    #[test]
    fn test_one_bad_span_fails_the_whole_call() {
        let sink = Arc::new(MemorySink::new());
        let engine = Interpolator::with_sink(Arc::clone(&sink) as Arc<dyn ErrorSink>);

        let result = engine.interpolate("{{user.name}} {{user.userid}}", &context());
        assert_eq!(result, None);
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn test_try_interpolate_does_not_report() {
        let sink = Arc::new(MemorySink::new());
        let engine = Interpolator::with_sink(Arc::clone(&sink) as Arc<dyn ErrorSink>);

        let result = engine.try_interpolate("{{user.userid}}", &DataContext::new());
        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let engine = Interpolator::with_sink(Arc::new(FnSink(
            |tag: &str, _error: &InterpolationError| {
                assert_eq!(tag, LOG_TAG);
            },
        )));
        assert_eq!(engine.interpolate("{{user.x}}", &DataContext::new()), None);
    }

    #[test]
    fn test_free_function_uses_default_engine() {
        assert_eq!(
            interpolate("Hello {{user.name}}", &context()).as_deref(),
            Some("Hello George")
        );
        assert_eq!(interpolate("{{user.userid}}", &DataContext::new()), None);
    }
}
