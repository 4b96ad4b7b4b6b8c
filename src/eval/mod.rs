//! Expression evaluation
//!
//! Evaluation of a tokenized expression proceeds in three stages:
//! innermost-first reduction of parenthesized groups, dispatch on a leading
//! helper name, and resolution of the remaining token against the data
//! context. Parentheses that never pair up are left in the stream and show
//! up in the enclosing helper's arity count; they are not a distinct error.

use crate::builtins::HelperRegistry;
use crate::context::{ContextValue, DataContext, TOP_LEVEL_KEYWORDS};
use crate::core::error::{InterpolationError, InterpolationResult};
use crate::core::token::Token;
use crate::lexer::Lexer;
use std::sync::Arc;
use tracing::trace;

/// Evaluator for tokenized expressions
pub struct Evaluator {
    helpers: Arc<HelperRegistry>,
}

impl Evaluator {
    /// Create a new evaluator with the given helper registry
    pub fn new(helpers: Arc<HelperRegistry>) -> Self {
        Self { helpers }
    }

    /// Tokenize and evaluate the content of one interpolation span
    pub fn evaluate(&self, expression: &str, context: &DataContext) -> InterpolationResult<String> {
        trace!(expression, "evaluating interpolation span");
        let tokens = Lexer::new(expression).tokenize();
        self.evaluate_tokens(tokens, context)
    }

    /// Reduce and dispatch a token stream
    pub fn evaluate_tokens(
        &self,
        mut tokens: Vec<Token>,
        context: &DataContext,
    ) -> InterpolationResult<String> {
        while let Some((open, close)) = innermost_group(&tokens) {
            let inner = tokens[open + 1..close].to_vec();
            let value = self.evaluate_tokens(inner, context)?;
            tokens.splice(open..=close, std::iter::once(Token::quoted(value)));
        }
        self.dispatch(&tokens, context)
    }

    /// Dispatch a fully-reduced token stream.
    ///
    /// An empty stream yields the empty string. A leading bare token naming
    /// a helper routes to it with the trailing tokens; anything else is
    /// resolved as a value reference. Trailing tokens after a value
    /// reference are ignored.
    fn dispatch(&self, tokens: &[Token], context: &DataContext) -> InterpolationResult<String> {
        let Some(first) = tokens.first() else {
            return Ok(String::new());
        };

        if let Token::Bare(name) = first {
            if let Some(helper) = self.helpers.lookup(name) {
                return helper.invoke(tokens, context);
            }
        }

        resolve_string(first, context)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(HelperRegistry::new()))
    }
}

/// Find the innermost parenthesized group: the rightmost `(` that has a
/// `)` after it, paired with the nearest such `)`.
fn innermost_group(tokens: &[Token]) -> Option<(usize, usize)> {
    let mut open = None;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => open = Some(index),
            Token::RParen => {
                if let Some(open) = open {
                    return Some((open, index));
                }
            }
            _ => {}
        }
    }
    None
}

/// A resolved scalar with its original kind preserved
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value (quoted-literal interior or context string)
    Text(String),
    /// Integer value
    Integer(i64),
    /// Double value
    Float(f64),
}

impl Scalar {
    /// Stringify: text as-is, integers in decimal form, doubles half-up
    /// rounded to the nearest integer
    pub fn render(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => format!("{}", f.round() as i64),
        }
    }
}

/// Resolve a single token to a scalar.
///
/// Quoted tokens yield their interior. Bare tokens are dotted paths rooted
/// at a top-level keyword, or failing that, numeric literals. Everything
/// else is an `UnexpectedValue` carrying the token's full textual form.
pub fn resolve_scalar(token: &Token, context: &DataContext) -> InterpolationResult<Scalar> {
    if let Some(interior) = token.quoted_interior() {
        return Ok(Scalar::Text(interior.to_string()));
    }

    let text = token.text();
    let unexpected = || InterpolationError::UnexpectedValue {
        value: text.to_string(),
    };

    let mut segments = text.split('.');
    let root = segments.next().unwrap_or_default();
    if TOP_LEVEL_KEYWORDS.contains(&root) {
        let mut node = context.get(root).ok_or_else(unexpected)?;
        for segment in segments {
            node = node.get(segment).ok_or_else(unexpected)?;
        }
        return match node {
            ContextValue::String(s) => Ok(Scalar::Text(s.clone())),
            ContextValue::Integer(i) => Ok(Scalar::Integer(*i)),
            ContextValue::Float(f) => Ok(Scalar::Float(*f)),
            ContextValue::Map(_) => Err(unexpected()),
        };
    }

    if let Ok(i) = text.parse::<i64>() {
        return Ok(Scalar::Integer(i));
    }
    if let Ok(f) = text.parse::<f64>() {
        return Ok(Scalar::Float(f));
    }

    Err(unexpected())
}

/// Resolve a single token to its string form
pub fn resolve_string(token: &Token, context: &DataContext) -> InterpolationResult<String> {
    resolve_scalar(token, context).map(|scalar| scalar.render())
}
