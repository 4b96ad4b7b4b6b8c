//! Number formatting helper
//!
//! `numberFormat value [style]` renders a number in one of four styles.
//! The value keeps its original kind: an integer formats as an integer, a
//! double carries its fraction into the chosen style. Rounding is half-up
//! throughout. Styles must be quoted to select anything other than the
//! default; a bare style token always falls back to `decimal`, as does an
//! unknown quoted style.

use super::locale;
use crate::context::DataContext;
use crate::core::error::{InterpolationError, InterpolationResult};
use crate::core::token::Token;
use crate::eval::{resolve_scalar, Scalar};

/// A numeric argument with its original kind preserved
#[derive(Debug, Clone, Copy)]
enum Number {
    Integer(i64),
    Float(f64),
}

/// Format a numeric value with an optional style
pub(crate) fn number_format(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let number = parse_number(args[0], ctx)?;

    let style = match args.get(1) {
        Some(token) => token.quoted_interior().unwrap_or("decimal"),
        None => "decimal",
    };

    let formatted = match style {
        "none" => style_none(number),
        "currency" => style_currency(number),
        "percent" => style_percent(number),
        _ => style_decimal(number),
    };

    Ok(formatted)
}

fn parse_number(token: &Token, ctx: &DataContext) -> InterpolationResult<Number> {
    match resolve_scalar(token, ctx)? {
        Scalar::Integer(i) => Ok(Number::Integer(i)),
        Scalar::Float(f) => Ok(Number::Float(f)),
        Scalar::Text(s) => {
            if let Ok(i) = s.parse::<i64>() {
                return Ok(Number::Integer(i));
            }
            if let Ok(f) = s.parse::<f64>() {
                return Ok(Number::Float(f));
            }
            Err(InterpolationError::InvalidNumber { input: s })
        }
    }
}

/// Half-up round to an integer
fn style_none(number: Number) -> String {
    match number {
        Number::Integer(i) => i.to_string(),
        Number::Float(f) => format!("{}", f.round() as i64),
    }
}

/// Up to three fraction digits, trailing zeros trimmed
fn style_decimal(number: Number) -> String {
    let f = match number {
        Number::Integer(i) => return i.to_string(),
        Number::Float(f) => f,
    };

    let thousandths = (f.abs() * 1000.0).round() as i128;
    if thousandths == 0 {
        return "0".to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    let whole = thousandths / 1000;
    let fraction = (thousandths % 1000) as u32;
    if fraction == 0 {
        return format!("{sign}{whole}");
    }

    let digits = format!("{fraction:03}");
    format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
}

/// Locale currency with exactly two fraction digits
fn style_currency(number: Number) -> String {
    let cents = match number {
        Number::Integer(i) => i as i128 * 100,
        Number::Float(f) => {
            let magnitude = (f.abs() * 100.0).round() as i128;
            if f < 0.0 {
                -magnitude
            } else {
                magnitude
            }
        }
    };

    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{sign}{}{}.{:02}",
        locale::CURRENCY_SYMBOL,
        cents / 100,
        cents % 100
    )
}

/// Multiply by one hundred, half-up round, append a percent sign
fn style_percent(number: Number) -> String {
    let percent = match number {
        Number::Integer(i) => i.saturating_mul(100),
        Number::Float(f) => (f * 100.0).round() as i64,
    };
    format!("{percent}%")
}
