//! String manipulation helpers

use crate::context::DataContext;
use crate::core::error::{location, InterpolationError, InterpolationResult};
use crate::core::token::Token;
use crate::eval::resolve_string;

/// Convert a value to uppercase
pub(crate) fn uppercase(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    Ok(s.to_uppercase())
}

/// Convert a value to lowercase
pub(crate) fn lowercase(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    Ok(s.to_lowercase())
}

/// Replace every occurrence of a literal with another literal.
///
/// The search and replacement arguments must be quoted in the source
/// expression; bare tokens here are rejected, reporting both tokens as
/// written.
pub(crate) fn replace(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;

    let (Some(from), Some(to)) = (args[1].quoted_interior(), args[2].quoted_interior()) else {
        return Err(InterpolationError::InvalidReplaceArguments {
            first: args[1].text().to_string(),
            second: args[2].text().to_string(),
        });
    };

    Ok(s.replace(from, to))
}

/// Remove the first `n` code points
pub(crate) fn drop_first(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    let n = parse_count(args[1], ctx)?;
    Ok(s.chars().skip(n).collect())
}

/// Remove the last `n` code points
pub(crate) fn drop_last(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    let n = parse_count(args[1], ctx)?;
    let len = s.chars().count();
    Ok(s.chars().take(len.saturating_sub(n)).collect())
}

/// Keep the first `n` code points; shorter inputs pass through unchanged
pub(crate) fn prefix(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    let n = parse_count(args[1], ctx)?;
    if n >= s.chars().count() {
        return Ok(s);
    }
    Ok(s.chars().take(n).collect())
}

/// Keep the last `n` code points; shorter inputs pass through unchanged
pub(crate) fn suffix(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let s = resolve_string(args[0], ctx)?;
    let n = parse_count(args[1], ctx)?;
    let len = s.chars().count();
    if n >= len {
        return Ok(s);
    }
    Ok(s.chars().skip(len - n).collect())
}

/// Resolve a count argument as a non-negative integer
fn parse_count(token: &Token, ctx: &DataContext) -> InterpolationResult<usize> {
    let raw = resolve_string(token, ctx)?;
    raw.parse::<usize>()
        .map_err(|_| InterpolationError::ExpectedInteger {
            location: location::THREE_ARGUMENT_HELPER,
        })
}
