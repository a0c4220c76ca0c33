//! Digit rounding and rendering
//!
//! Both strategies shift values through their decimal string representation before
//! rounding, so `1.005` rounded to two decimals gives `1.01` rather than the `1.00`
//! that scaling the binary value by 100 would produce.

use crate::types::{DigitStrategy, RoundingMode};

/// Smallest magnitude at which every `f64` is an integer
const INTEGRAL_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Multiply a value by `10^exponent` through its decimal representation
///
/// Returns `None` when the result overflows. A finite `f64` always displays as
/// plain decimal digits, so the parse itself cannot fail.
fn shift(value: f64, exponent: i32) -> Option<f64> {
    format!("{value}e{exponent}")
        .parse::<f64>()
        .ok()
        .filter(|shifted| shifted.is_finite())
}

/// Round a value at the decimal position `10^exponent`
///
/// A value whose shifted form overflows is returned unrounded.
fn round_to_exponent(value: f64, exponent: i32, mode: RoundingMode) -> f64 {
    if exponent == 0 {
        return mode.apply(value);
    }
    if exponent < 0 && value.abs() >= INTEGRAL_MAGNITUDE {
        return value;
    }
    shift(value, -exponent)
        .and_then(|shifted| shift(mode.apply(shifted), exponent))
        .unwrap_or(value)
}

/// Round a value to a multiple of `increment`
fn round_to_increment(value: f64, increment: f64, mode: RoundingMode) -> f64 {
    if increment == 1.0 {
        return mode.apply(value);
    }

    // Split the increment into mantissa and exponent, e.g. 0.05 -> (5, -2)
    let scientific = format!("{increment:e}");
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m.parse::<f64>().ok()?, e.parse::<i32>().ok()?)))
    else {
        return mode.apply(value / increment) * increment;
    };

    shift(value / mantissa, -exponent)
        .and_then(|shifted| shift(mode.apply(shifted) * mantissa, exponent))
        .unwrap_or(value)
}

/// Pad the fraction part of a plain decimal string with trailing zeros
fn pad_fraction(digits: &str, minimum_length: usize) -> String {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if fraction.len() >= minimum_length {
        return digits.to_string();
    }
    format!("{integer}.{fraction:0<minimum_length$}")
}

/// Pad the integer part of a plain decimal string with leading zeros, after the sign
fn pad_integer(digits: &str, minimum_length: usize) -> String {
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", digits),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut result = format!("{sign}{integer:0>minimum_length$}");
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Round a number to `maximum_fraction_digits` decimals, or to `increment` when one is set
pub(super) fn round_fraction(
    number: f64,
    maximum_fraction_digits: u32,
    mode: RoundingMode,
    increment: Option<f64>,
) -> f64 {
    if maximum_fraction_digits == 0 {
        return mode.apply(number);
    }
    match increment.filter(|increment| *increment > 0.0) {
        Some(increment) => round_to_increment(number, increment, mode),
        None => round_to_exponent(number, -(maximum_fraction_digits as i32), mode),
    }
}

/// Format a number by rounding to a number of fraction digits
///
/// # Arguments
/// * `number` - The value to format
/// * `minimum_integer_digits` - Integer part is zero-padded to at least this many digits
/// * `minimum_fraction_digits` - Fraction part is zero-padded to at least this many digits
/// * `maximum_fraction_digits` - Fraction digits kept when rounding; 0 rounds to an integer
/// * `mode` - Rounding method
/// * `increment` - Rounding increment, used instead of `maximum_fraction_digits` when set
///
/// # Returns
/// * `String` - Plain decimal digits using `.` as decimal separator, signed
///
/// # Examples
/// ```
/// use locale_number_format::formatter::format_integer_fraction;
/// use locale_number_format::types::RoundingMode;
///
/// assert_eq!(format_integer_fraction(1.005, 1, 0, 2, RoundingMode::Round, None), "1.01");
/// assert_eq!(format_integer_fraction(1.23, 3, 3, 3, RoundingMode::Round, None), "001.230");
/// assert_eq!(format_integer_fraction(1.27, 1, 2, 2, RoundingMode::Round, Some(0.05)), "1.25");
/// ```
pub fn format_integer_fraction(
    number: f64,
    minimum_integer_digits: u32,
    minimum_fraction_digits: u32,
    maximum_fraction_digits: u32,
    mode: RoundingMode,
    increment: Option<f64>,
) -> String {
    let rounded = round_fraction(number, maximum_fraction_digits, mode, increment);

    let mut digits = rounded.to_string();
    if minimum_fraction_digits > 0 {
        digits = pad_fraction(&digits, minimum_fraction_digits as usize);
    }
    if minimum_integer_digits > 0 {
        digits = pad_integer(&digits, minimum_integer_digits as usize);
    }
    digits
}

/// Round a number to `precision` significant digits
fn round_to_precision(number: f64, precision: u32, mode: RoundingMode) -> f64 {
    if number == 0.0 {
        return number;
    }
    let order = number.abs().log10().ceil() as i32 - precision as i32;
    round_to_exponent(number, order, mode)
}

/// Count the significant digits shown by a plain decimal string
fn count_significant_digits(digits: &str) -> usize {
    let significant = digits
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count();
    // A zero value still shows one significant digit
    significant.max(1)
}

/// Format a number by rounding to a range of significant digits
///
/// The value is rounded at both precisions; the maximum precision is kept only when it
/// differs from the minimum one. Trailing fraction zeros are added until `minimum`
/// significant digits are shown. An inverted range is treated as `minimum..=minimum`.
///
/// # Examples
/// ```
/// use locale_number_format::formatter::format_significant_digits;
/// use locale_number_format::types::RoundingMode;
///
/// assert_eq!(format_significant_digits(1234.5, 2, 3, RoundingMode::Round), "1230");
/// assert_eq!(format_significant_digits(1.5, 3, 5, RoundingMode::Round), "1.50");
/// ```
pub fn format_significant_digits(
    number: f64,
    minimum: u32,
    maximum: u32,
    mode: RoundingMode,
) -> String {
    let maximum = maximum.max(minimum);

    let at_minimum = round_to_precision(number, minimum, mode);
    let at_maximum = round_to_precision(number, maximum, mode);
    let rounded = if at_minimum == at_maximum {
        at_minimum
    } else {
        at_maximum
    };

    let digits = rounded.to_string();
    let shown = count_significant_digits(&digits);
    let minimum = minimum as usize;
    if shown >= minimum {
        return digits;
    }

    let fraction_length = digits.split_once('.').map_or(0, |(_, f)| f.len());
    pad_fraction(&digits, fraction_length + minimum - shown)
}

/// Format a number with the selected digit strategy
pub(super) fn format_digits(
    number: f64,
    strategy: DigitStrategy,
    mode: RoundingMode,
    increment: Option<f64>,
) -> String {
    match strategy {
        DigitStrategy::SignificantDigits { minimum, maximum } => {
            format_significant_digits(number, minimum, maximum, mode)
        }
        DigitStrategy::IntegerFraction {
            minimum_integer,
            minimum_fraction,
            maximum_fraction,
        } => format_integer_fraction(
            number,
            minimum_integer,
            minimum_fraction,
            maximum_fraction,
            mode,
            increment,
        ),
    }
}
