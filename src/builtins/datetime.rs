//! Date parsing and formatting helper
//!
//! `dateFormat input pattern` parses `input` against a fixed list of
//! timestamp shapes and renders it with a date-format pattern (`yyyy`,
//! `MMM`, `EEEE`, `a`, quoted literals, …) using the en-CA names from
//! [`locale`](super::locale). Zoned inputs keep their parsed offset; local
//! inputs are rendered as parsed.

use super::locale;
use crate::context::DataContext;
use crate::core::error::{InterpolationError, InterpolationResult};
use crate::core::token::Token;
use crate::eval::resolve_string;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};

/// Format a timestamp with a date pattern
pub(crate) fn date_format(args: &[&Token], ctx: &DataContext) -> InterpolationResult<String> {
    let input = resolve_string(args[0], ctx)?;
    let timestamp = parse_timestamp(&input)?;

    // The pattern must be written as a quoted literal; a bare token is
    // reported as an invalid date, not resolved against the context
    let Some(pattern) = args[1].quoted_interior() else {
        return Err(InterpolationError::InvalidDate {
            argument: args[1].text().to_string(),
        });
    };

    Ok(format_pattern(&timestamp, pattern))
}

/// Accepted input shapes, tried in order: zoned with `T`, zoned with a
/// space, then the same two without a zone (treated as offset zero).
fn parse_timestamp(input: &str) -> InterpolationResult<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%z") {
        return Ok(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    // Report the input with its date/time separator normalized
    Err(InterpolationError::InvalidDate {
        argument: input.replace(' ', "T"),
    })
}

/// Render a date-format pattern.
///
/// Runs of the same pattern letter select a field and width; characters
/// between single quotes are literal (`''` is an escaped quote); any other
/// character passes through unchanged. Unrecognized pattern letters are
/// emitted as written.
fn format_pattern(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }
            while let Some(c) = chars.next() {
                if c != '\'' {
                    out.push(c);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    break;
                }
            }
        } else if ch.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                count += 1;
            }
            render_field(&mut out, dt, ch, count);
        } else {
            out.push(ch);
        }
    }

    out
}

fn render_field(out: &mut String, dt: &DateTime<FixedOffset>, letter: char, count: usize) {
    use std::fmt::Write;

    match letter {
        'y' => {
            if count == 2 {
                let _ = write!(out, "{:02}", dt.year().rem_euclid(100));
            } else {
                let _ = write!(out, "{:0count$}", dt.year(), count = count);
            }
        }
        'M' | 'L' => match count {
            1 | 2 => {
                let _ = write!(out, "{:0count$}", dt.month(), count = count);
            }
            3 => out.push_str(locale::MONTHS_ABBREVIATED[dt.month0() as usize]),
            _ => out.push_str(locale::MONTHS_WIDE[dt.month0() as usize]),
        },
        'd' => {
            let _ = write!(out, "{:0count$}", dt.day(), count = count);
        }
        'E' => {
            let index = dt.weekday().num_days_from_sunday() as usize;
            if count <= 3 {
                out.push_str(locale::WEEKDAYS_ABBREVIATED[index]);
            } else {
                out.push_str(locale::WEEKDAYS_WIDE[index]);
            }
        }
        'H' => {
            let _ = write!(out, "{:0count$}", dt.hour(), count = count);
        }
        'h' => {
            let (_, hour12) = dt.hour12();
            let _ = write!(out, "{:0count$}", hour12, count = count);
        }
        'm' => {
            let _ = write!(out, "{:0count$}", dt.minute(), count = count);
        }
        's' => {
            let _ = write!(out, "{:0count$}", dt.second(), count = count);
        }
        'S' => {
            // Inputs carry whole seconds only
            for _ in 0..count {
                out.push('0');
            }
        }
        'a' => {
            let (pm, _) = dt.hour12();
            out.push_str(locale::DAY_PERIODS[usize::from(pm)]);
        }
        'Z' => {
            let offset = dt.offset().local_minus_utc();
            let sign = if offset < 0 { '-' } else { '+' };
            let minutes = offset.abs() / 60;
            let _ = write!(out, "{}{:02}{:02}", sign, minutes / 60, minutes % 60);
        }
        _ => {
            // Unknown pattern letter: emit as written
            for _ in 0..count {
                out.push(letter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(input: &str, pattern: &str) -> InterpolationResult<String> {
        let input = Token::quoted(input);
        let pattern = Token::quoted(pattern);
        date_format(&[&input, &pattern], &DataContext::new())
    }

    #[test]
    fn test_zoned_input_with_space() {
        assert_eq!(
            format("2022-02-01 19:46:31+0000", "EEEE, d").unwrap(),
            "Tuesday, 1"
        );
    }

    #[test]
    fn test_zoned_input_with_t() {
        assert_eq!(
            format("2022-02-01T19:46:31+0000", "yyyy-MM-dd").unwrap(),
            "2022-02-01"
        );
    }

    #[test]
    fn test_local_input() {
        assert_eq!(
            format("2022-02-01 19:46:31", "HH:mm:ss").unwrap(),
            "19:46:31"
        );
        assert_eq!(format("2022-02-01T19:46:31", "d").unwrap(), "1");
    }

    #[test]
    fn test_locale_abbreviations_carry_periods() {
        assert_eq!(format("2022-02-01 19:46:31+0000", "EEE").unwrap(), "Tue.");
        assert_eq!(format("2022-02-01 19:46:31+0000", "MMM").unwrap(), "Feb.");
        assert_eq!(format("2022-05-01 00:00:00", "MMM").unwrap(), "May");
    }

    #[test]
    fn test_wide_names() {
        assert_eq!(
            format("2022-02-01 19:46:31+0000", "MMMM yyyy").unwrap(),
            "February 2022"
        );
    }

    #[test]
    fn test_day_periods() {
        assert_eq!(format("2022-02-01 19:46:31+0000", "a").unwrap(), "p.m.");
        assert_eq!(format("2022-02-01 09:46:31+0000", "aa").unwrap(), "a.m.");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(format("2022-02-01 19:46:31+0000", "h:mm a").unwrap(), "7:46 p.m.");
        assert_eq!(format("2022-02-01 00:10:00", "hh:mm a").unwrap(), "12:10 a.m.");
    }

    #[test]
    fn test_quoted_literal_in_pattern() {
        assert_eq!(
            format("2022-02-01 19:46:31+0000", "yyyy-MM-dd'T'HH:mm:ss").unwrap(),
            "2022-02-01T19:46:31"
        );
        assert_eq!(format("2022-02-01 00:00:00", "h 'o''clock'").unwrap(), "12 o'clock");
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(format("2022-02-01 00:00:00", "yy").unwrap(), "22");
    }

    #[test]
    fn test_offset_rendering() {
        assert_eq!(
            format("2022-02-01 19:46:31+0130", "Z").unwrap(),
            "+0130"
        );
    }

    #[test]
    fn test_nonzero_offset_keeps_local_fields() {
        // 19:46 at -0500 stays 19:46 when rendered in its own offset
        assert_eq!(
            format("2022-02-01 19:46:31-0500", "HH:mm").unwrap(),
            "19:46"
        );
    }

    #[test]
    fn test_unparseable_input_reports_normalized_argument() {
        assert_eq!(
            format("NOT A DATE!", "EEEE"),
            Err(InterpolationError::InvalidDate {
                argument: "NOTTATDATE!".to_string(),
            })
        );
    }

    #[test]
    fn test_bare_pattern_is_rejected() {
        let input = Token::quoted("2022-02-01 19:46:31+0000");
        let pattern = Token::Bare("EEEE".to_string());
        assert_eq!(
            date_format(&[&input, &pattern], &DataContext::new()),
            Err(InterpolationError::InvalidDate {
                argument: "EEEE".to_string(),
            })
        );
    }
}
