//! Token types for the expression tokenizer
//!
//! Tokens carry their textual form as written in the source expression. A
//! quoted token keeps its surrounding quotes, so `"foo"` is the
//! four-character text `"foo"` and its interior is `foo`. Helpers observe
//! the distinction between quoted and bare arguments, so it must survive
//! all the way through reduction and dispatch.

use std::fmt;

/// A token in an interpolation expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Quoted literal; the text includes the delimiting quotes
    Quoted(String),
    /// Bare token: identifier path, number, or helper name
    Bare(String),
}

impl Token {
    /// Build a quoted token from unquoted content.
    ///
    /// Reduction uses this to splice a sub-expression result back into the
    /// token stream as a literal.
    pub fn quoted(content: impl AsRef<str>) -> Self {
        Token::Quoted(format!("\"{}\"", content.as_ref()))
    }

    /// Classify a finished run of non-paren characters.
    ///
    /// A token is quoted when it both starts and ends with a quote. Runs
    /// that merely contain quotes (e.g. `Mike"` from an unbalanced literal)
    /// stay bare.
    pub(crate) fn from_text(text: String) -> Self {
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            Token::Quoted(text)
        } else {
            Token::Bare(text)
        }
    }

    /// The token's textual form, exactly as written
    pub fn text(&self) -> &str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Quoted(text) | Token::Bare(text) => text,
        }
    }

    /// Interior of a quoted token (without the delimiting quotes), or
    /// `None` for any other token
    pub fn quoted_interior(&self) -> Option<&str> {
        match self {
            Token::Quoted(text) => Some(&text[1..text.len() - 1]),
            _ => None,
        }
    }

    /// Whether this token is a parenthesis
    pub fn is_paren(&self) -> bool {
        matches!(self, Token::LParen | Token::RParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
