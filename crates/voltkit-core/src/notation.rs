//! Engineering-notation literal grammar.
//!
//! One grammar definition, two modes. The lenient mode backs free-form
//! probing ([`matches`]/[`parse`]) and admits plain decimals, scientific
//! notation, and single-character magnitude suffixes. The strict mode backs
//! editable numeric-input widgets ([`split_number`]): a run of digits and
//! dots, then at most one ASCII suffix, nothing else.

use crate::error::{Error, Result};
use crate::units::Magnitude;

type Scanner<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// A literal recognized by the lenient grammar.
enum Literal<'a> {
    Plain(&'a str),
    Scientific { mantissa: &'a str, exponent: &'a str },
    Suffixed { mantissa: &'a str, magnitude: Magnitude },
}

fn eat_digits(chars: &mut Scanner<'_>) -> usize {
    let mut count = 0;
    while matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
        chars.next();
        count += 1;
    }
    count
}

/// Lenient scan: `digits[.digits]` followed by nothing, an exponent, or a
/// single magnitude suffix. Mantissa signs are not part of the grammar.
fn scan_lenient(text: &str) -> Option<Literal<'_>> {
    let mut chars: Scanner<'_> = text.char_indices().peekable();

    if eat_digits(&mut chars) == 0 {
        return None;
    }
    if matches!(chars.peek(), Some((_, '.'))) {
        chars.next();
        if eat_digits(&mut chars) == 0 {
            return None;
        }
    }

    match chars.next() {
        None => Some(Literal::Plain(text)),
        Some((at, 'e')) | Some((at, 'E')) => {
            if matches!(chars.peek(), Some((_, '+')) | Some((_, '-'))) {
                chars.next();
            }
            if eat_digits(&mut chars) == 0 || chars.next().is_some() {
                return None;
            }
            Some(Literal::Scientific {
                mantissa: &text[..at],
                exponent: &text[at + 1..],
            })
        }
        Some((at, c)) => {
            let magnitude = Magnitude::from_char(c)?;
            if chars.next().is_some() {
                return None;
            }
            Some(Literal::Suffixed {
                mantissa: &text[..at],
                magnitude,
            })
        }
    }
}

/// Strict scan: any nonempty run of digits and dots, then at most one ASCII
/// suffix. Multi-dot runs pass through here; the widget owns mantissa
/// validation.
fn scan_strict(text: &str) -> Option<(&str, Magnitude)> {
    let mut chars: Scanner<'_> = text.char_indices().peekable();

    let mut end = 0;
    while let Some(&(at, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            chars.next();
            end = at + 1;
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }

    match chars.next() {
        None => Some((text, Magnitude::Base)),
        Some((at, c)) => {
            let magnitude = Magnitude::from_strict_char(c)?;
            if chars.next().is_some() {
                return None;
            }
            Some((&text[..at], magnitude))
        }
    }
}

/// Whether `text` is a well-formed engineering-notation literal.
pub fn matches(text: &str) -> bool {
    scan_lenient(text).is_some()
}

fn scale(mantissa: &str, power: i32) -> f64 {
    let base: f64 = match mantissa.parse() {
        Ok(v) => v,
        Err(_) => return f64::NAN,
    };
    base * 10f64.powi(power)
}

/// Evaluate an engineering-notation literal.
///
/// Invalid input yields NaN rather than an error, so input-validation code
/// can probe free-form text without a failure path. Scaling is a single
/// base × 10^power step to keep extreme exponents precise.
pub fn parse(text: &str) -> f64 {
    match scan_lenient(text) {
        None => f64::NAN,
        Some(Literal::Plain(number)) => number.parse().unwrap_or(f64::NAN),
        Some(Literal::Scientific { mantissa, exponent }) => exponent
            .parse::<i32>()
            .map_or(f64::NAN, |power| scale(mantissa, power)),
        Some(Literal::Suffixed { mantissa, magnitude }) => {
            scale(mantissa, magnitude.exponent())
        }
    }
}

/// Mantissa and magnitude of a literal split by the strict widget grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNumber {
    /// Numeric portion, unconverted.
    pub number: String,
    /// Detected magnitude suffix, [`Magnitude::Base`] when absent.
    pub rank: Magnitude,
}

/// Split a literal into mantissa and magnitude using the strict grammar.
///
/// Scientific notation and the `μ` spelling are not accepted here.
pub fn split_number(text: &str) -> Result<SplitNumber> {
    let (number, rank) =
        scan_strict(text).ok_or_else(|| Error::InvalidNumberFormat(text.to_string()))?;

    Ok(SplitNumber {
        number: number.to_string(),
        rank,
    })
}
