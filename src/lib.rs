#![warn(clippy::all)]
#![warn(missing_docs)]

//! # interpolator
//!
//! String interpolation engine: a small expression language embedded in
//! arbitrary text, substituting values from a structured data context and
//! transforming them through a fixed set of built-in helpers.
//!
//! Templates mark expressions with `{{ … }}`:
//!
//! - Value references: `{{user.name}}`, `{{data.order.total}}`
//! - Helper calls: `{{uppercase user.name}}`
//! - Nested calls via parentheses: `{{replace (dropFirst user.name 4) "a" "b"}}`
//! - Quoted literals, including embedded whitespace: `{{prefix "jack reacher" 4}}`
//!
//! Text outside `{{ … }}` passes through verbatim; an unmatched `{{` is
//! itself literal text. Any error in any span fails the whole call: the
//! error is reported to the engine's sink and `interpolate` returns `None`.
//!
//! ## Quick Start
//!
//! ```
//! use interpolator::{DataContext, Interpolator};
//! use std::collections::HashMap;
//!
//! let mut user = HashMap::new();
//! user.insert("name".to_string(), "George".into());
//!
//! let context = DataContext::builder().user(user).build();
//! let engine = Interpolator::new();
//!
//! let result = engine.interpolate("Hello {{uppercase user.name}}", &context);
//! assert_eq!(result.as_deref(), Some("Hello GEORGE"));
//! ```
//!
//! ## Data Context
//!
//! Dotted paths are rooted at one of three top-level keywords: `data`,
//! `url`, `user`. Each maps to a tree of nested maps and scalars (strings,
//! integers, doubles). Contexts also deserialize from JSON objects via
//! `serde`:
//!
//! ```
//! use interpolator::{interpolate, DataContext};
//!
//! let context: DataContext = serde_json::from_value(serde_json::json!({
//!     "data": { "int": 2, "negativeDouble": -55.7 }
//! })).unwrap();
//!
//! let result = interpolate("{{data.int}} {{data.negativeDouble}}", &context);
//! assert_eq!(result.as_deref(), Some("2 -56"));
//! ```
//!
//! ## Built-in Helpers
//!
//! The helper table is fixed; names are case-sensitive.
//!
//! ### String Helpers
//! - `lowercase s` / `uppercase s` - Unicode-aware case mapping
//! - `replace s old new` - Replace every occurrence (`old`/`new` must be quoted)
//! - `dropFirst s n` / `dropLast s n` - Remove `n` code points
//! - `prefix s n` / `suffix s n` - Keep `n` code points
//!
//! ### Date Helpers
//! - `dateFormat input pattern` (alias `date`) - Parse a timestamp and
//!   render it with a date pattern (`"EEEE, d"`, `"yyyy-MM-dd"`, …)
//!
//! ### Number Helpers
//! - `numberFormat value [style]` - Styles: `"none"`, `"decimal"`
//!   (default), `"currency"`, `"percent"`
//!
//! Dates and numbers render in the `en-CA` locale (`Tue.`, `Feb.`,
//! `p.m.`, `$42.50`) regardless of the process locale.

// Core modules
pub mod builtins;
pub mod context;
pub mod core;
pub mod engine;
pub mod eval;
pub mod lexer;
pub mod scanner;
pub mod sink;

// Re-exports
pub use crate::context::{ContextValue, DataContext, DataContextBuilder, TOP_LEVEL_KEYWORDS};
pub use crate::core::error::{InterpolationError, InterpolationResult};
pub use crate::core::token::Token;
pub use crate::engine::{interpolate, Interpolator, LOG_TAG};
pub use crate::eval::Evaluator;
pub use crate::scanner::Segment;
pub use crate::sink::{ErrorSink, FnSink, MemorySink, TracingSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        interpolate, ContextValue, DataContext, DataContextBuilder, ErrorSink, InterpolationError,
        InterpolationResult, Interpolator, MemorySink,
    };
}
