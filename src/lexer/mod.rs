//! Lexer for tokenizing interpolation expressions
//!
//! Converts the raw text between `{{` and `}}` into a flat token list.
//! Parentheses are structural only outside quotes; inside a quoted literal
//! every character (whitespace, newlines, parens) belongs to the literal.
//! Quote balance is not validated here: a literal with an embedded unescaped
//! quote tokenizes as alternating quoted and bare runs, and the mismatch
//! surfaces later as a helper arity error.

use crate::core::token::Token;

/// Lexer for a single expression
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from the content of an interpolation span
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input
    ///
    /// Tokenization cannot fail; malformed input degrades to bare tokens
    /// that later stages reject with structured errors.
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in self.input.chars() {
            if in_quotes {
                current.push(ch);
                if ch == '"' {
                    tokens.push(Token::from_text(std::mem::take(&mut current)));
                    in_quotes = false;
                }
                continue;
            }

            match ch {
                '"' => {
                    current.push('"');
                    in_quotes = true;
                }
                '(' | ')' => {
                    if !current.is_empty() {
                        tokens.push(Token::from_text(std::mem::take(&mut current)));
                    }
                    tokens.push(if ch == '(' { Token::LParen } else { Token::RParen });
                }
                ch if ch.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(Token::from_text(std::mem::take(&mut current)));
                    }
                }
                ch => current.push(ch),
            }
        }

        if !current.is_empty() {
            tokens.push(Token::from_text(current));
        }

        tokens
    }
}
