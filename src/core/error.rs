//! Error taxonomy for interpolation
//!
//! The set of failure modes is closed: every error the engine can produce
//! is one of these variants, and the rendered message for a given variant
//! and field set is stable. Hosts match on the message text, so the
//! `#[error(...)]` strings here are part of the public contract.

use thiserror::Error;

/// Helper family tag carried by arity and integer-parse errors
pub mod location {
    /// `lowercase`, `uppercase`
    pub const TWO_ARGUMENT_HELPER: &str = "twoArgumentHelper";
    /// `dropFirst`, `dropLast`, `prefix`, `suffix`
    pub const THREE_ARGUMENT_HELPER: &str = "threeArgumentHelper";
    /// `replace`
    pub const REPLACE_HELPER: &str = "replaceHelper";
    /// `dateFormat`, `date`
    pub const FORMAT_DATE_HELPER: &str = "formatDateHelper";
    /// `numberFormat`
    pub const FORMAT_NUMBER_HELPER: &str = "formatNumberHelper";
}

/// An error produced while evaluating an interpolation span
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// A token could not be resolved to a value: the top-level keyword is
    /// unknown or absent, an intermediate path segment is missing, or the
    /// token is neither a path nor a number
    #[error("Unexpected value: {value}")]
    UnexpectedValue {
        /// The offending token in its textual form (full dotted path)
        value: String,
    },

    /// A helper was invoked with the wrong number of tokens
    #[error("{location} expected {expected} arguments, got {actual}")]
    InvalidArgumentNumber {
        /// Helper family tag (see [`location`])
        location: &'static str,
        /// Expected token count, including the helper name (`"2..3"` for
        /// variable arity)
        expected: &'static str,
        /// Observed token count
        actual: usize,
    },

    /// `replace` was given a search or replacement argument that is not a
    /// quoted literal
    #[error("Invalid replace arguments: {first}, {second}")]
    InvalidReplaceArguments {
        /// Third token, textual form
        first: String,
        /// Fourth token, textual form
        second: String,
    },

    /// A date input failed to parse, or a date pattern was not quoted
    #[error("Invalid date: {argument}")]
    InvalidDate {
        /// The rejected argument (inputs are reported with spaces
        /// normalized to `T`)
        argument: String,
    },

    /// An integer argument could not be parsed as a non-negative integer
    #[error("{location} expected integer")]
    ExpectedInteger {
        /// Helper family tag (see [`location`])
        location: &'static str,
    },

    /// A numeric argument to `numberFormat` failed to parse
    #[error("For input string: \"{input}\"")]
    InvalidNumber {
        /// The string that failed numeric parsing
        input: String,
    },
}

/// Result type for interpolation operations
pub type InterpolationResult<T> = Result<T, InterpolationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats_are_stable() {
        let err = InterpolationError::UnexpectedValue {
            value: "user.userid".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected value: user.userid");

        let err = InterpolationError::InvalidArgumentNumber {
            location: location::REPLACE_HELPER,
            expected: "4",
            actual: 6,
        };
        assert_eq!(err.to_string(), "replaceHelper expected 4 arguments, got 6");

        let err = InterpolationError::InvalidReplaceArguments {
            first: "jack".to_string(),
            second: "\"mike\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid replace arguments: jack, \"mike\""
        );

        let err = InterpolationError::InvalidDate {
            argument: "NOTTATDATE!".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid date: NOTTATDATE!");

        let err = InterpolationError::ExpectedInteger {
            location: location::THREE_ARGUMENT_HELPER,
        };
        assert_eq!(err.to_string(), "threeArgumentHelper expected integer");

        let err = InterpolationError::InvalidNumber {
            input: "Twenty".to_string(),
        };
        assert_eq!(err.to_string(), "For input string: \"Twenty\"");
    }

    #[test]
    fn test_equal_fields_equal_messages() {
        let a = InterpolationError::UnexpectedValue {
            value: "data.x".to_string(),
        };
        let b = InterpolationError::UnexpectedValue {
            value: "data.x".to_string(),
        };
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }
}
