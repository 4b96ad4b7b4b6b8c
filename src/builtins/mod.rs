//! Built-in helpers for the interpolation language
//!
//! The helper table is fixed and closed: a bare leading token dispatches to
//! one of these entries or is treated as a value reference. Helpers receive
//! the full reduced token stream (helper name first) so that arity errors
//! can report the observed token count, and so quoted-versus-bare argument
//! distinctions remain visible.

pub mod datetime;
pub mod locale;
pub mod number;
pub mod string;

use crate::context::DataContext;
use crate::core::error::{location, InterpolationError, InterpolationResult};
use crate::core::token::Token;
use std::collections::HashMap;

/// A built-in helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helper {
    /// `lowercase s`
    Lowercase,
    /// `uppercase s`
    Uppercase,
    /// `replace s old new`
    Replace,
    /// `dropFirst s n`
    DropFirst,
    /// `dropLast s n`
    DropLast,
    /// `prefix s n`
    Prefix,
    /// `suffix s n`
    Suffix,
    /// `dateFormat input pattern` (alias `date`)
    DateFormat,
    /// `numberFormat value [style]`
    NumberFormat,
}

impl Helper {
    /// Helper family tag used in arity and integer-parse errors
    pub fn location(&self) -> &'static str {
        match self {
            Helper::Lowercase | Helper::Uppercase => location::TWO_ARGUMENT_HELPER,
            Helper::DropFirst | Helper::DropLast | Helper::Prefix | Helper::Suffix => {
                location::THREE_ARGUMENT_HELPER
            }
            Helper::Replace => location::REPLACE_HELPER,
            Helper::DateFormat => location::FORMAT_DATE_HELPER,
            Helper::NumberFormat => location::FORMAT_NUMBER_HELPER,
        }
    }

    /// Expected token count, helper name included
    pub fn expected(&self) -> &'static str {
        match self {
            Helper::Lowercase | Helper::Uppercase => "2",
            Helper::DropFirst | Helper::DropLast | Helper::Prefix | Helper::Suffix => "3",
            Helper::Replace => "4",
            Helper::DateFormat => "3",
            Helper::NumberFormat => "2..3",
        }
    }

    fn arity_matches(&self, observed: usize) -> bool {
        match self {
            Helper::Lowercase | Helper::Uppercase => observed == 2,
            Helper::DropFirst | Helper::DropLast | Helper::Prefix | Helper::Suffix => observed == 3,
            Helper::Replace => observed == 4,
            Helper::DateFormat => observed == 3,
            Helper::NumberFormat => (2..=3).contains(&observed),
        }
    }

    fn arity_error(&self, actual: usize) -> InterpolationError {
        InterpolationError::InvalidArgumentNumber {
            location: self.location(),
            expected: self.expected(),
            actual,
        }
    }

    /// Invoke the helper on a fully-reduced token stream.
    ///
    /// `tokens[0]` is the helper name. Unreduced parentheses count toward
    /// the observed arity, then are stripped before the helper sees its
    /// arguments.
    pub fn invoke(&self, tokens: &[Token], ctx: &DataContext) -> InterpolationResult<String> {
        let observed = tokens.len();
        if !self.arity_matches(observed) {
            return Err(self.arity_error(observed));
        }

        let args: Vec<&Token> = tokens[1..].iter().filter(|t| !t.is_paren()).collect();
        if args.len() != observed - 1 {
            // Stray parens slipped past the count check
            return Err(self.arity_error(args.len() + 1));
        }

        match self {
            Helper::Lowercase => string::lowercase(&args, ctx),
            Helper::Uppercase => string::uppercase(&args, ctx),
            Helper::Replace => string::replace(&args, ctx),
            Helper::DropFirst => string::drop_first(&args, ctx),
            Helper::DropLast => string::drop_last(&args, ctx),
            Helper::Prefix => string::prefix(&args, ctx),
            Helper::Suffix => string::suffix(&args, ctx),
            Helper::DateFormat => datetime::date_format(&args, ctx),
            Helper::NumberFormat => number::number_format(&args, ctx),
        }
    }
}

/// Registry of all built-in helpers
pub struct HelperRegistry {
    helpers: HashMap<&'static str, Helper>,
}

impl HelperRegistry {
    /// Create a registry with the standard helper table
    pub fn new() -> Self {
        let mut registry = Self {
            helpers: HashMap::new(),
        };

        registry.register("lowercase", Helper::Lowercase);
        registry.register("uppercase", Helper::Uppercase);
        registry.register("replace", Helper::Replace);
        registry.register("dropFirst", Helper::DropFirst);
        registry.register("dropLast", Helper::DropLast);
        registry.register("prefix", Helper::Prefix);
        registry.register("suffix", Helper::Suffix);
        registry.register("dateFormat", Helper::DateFormat);
        registry.register("date", Helper::DateFormat);
        registry.register("numberFormat", Helper::NumberFormat);

        registry
    }

    fn register(&mut self, name: &'static str, helper: Helper) {
        self.helpers.insert(name, helper);
    }

    /// Look up a helper by its leading-token name (case-sensitive)
    pub fn lookup(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    /// Check if a helper name exists
    pub fn has_helper(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// All registered helper names
    pub fn helper_names(&self) -> Vec<&'static str> {
        self.helpers.keys().copied().collect()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
