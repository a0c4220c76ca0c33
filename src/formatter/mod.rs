//! Number formatting module
//!
//! This module renders numbers according to a precompiled [`FormatSpec`].
//! The main entry point is the `format_number` function, which runs the value through
//! sign selection, percent/per-mille scaling, compact notation, digit rounding, grouping
//! and finally the localization of symbols, digits and quoted literals.

mod assembly;
mod compact;
mod digits;
mod grouping;
mod sections;

use log::{debug, trace};

use crate::error::FormatError;
use crate::types::{FormatSpec, PluralSelector};

pub use digits::{format_integer_fraction, format_significant_digits};
pub use grouping::insert_grouping_separators;

/// Format a number according to the specified format spec
///
/// NaN is returned as the spec's NaN symbol and infinities as
/// `prefix + infinity symbol + suffix`; neither goes through symbol, digit or literal
/// localization.
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `spec` - The precompiled format spec
/// * `plural` - Plural category selector used by compact notation; `other` if absent
///
/// # Returns
/// * `Result<String, FormatError>` - The formatted number, or an error if the spec's
///   compact patterns do not cover the value's magnitude
///
/// # Examples
/// ```
/// use locale_number_format::formatter::format_number;
/// use locale_number_format::types::FormatSpec;
///
/// let spec = FormatSpec::default();
/// assert_eq!(format_number(1234567.891, &spec, None).unwrap(), "1,234,567.891");
/// assert_eq!(format_number(-0.5, &spec, None).unwrap(), "-0.5");
/// ```
pub fn format_number(
    value: f64,
    spec: &FormatSpec,
    plural: Option<&dyn PluralSelector>,
) -> Result<String, FormatError> {
    if value.is_nan() {
        return Ok(spec.nan_symbol.clone());
    }

    let section = sections::select_section(value, spec);

    if value.is_infinite() {
        return Ok(format!(
            "{}{}{}",
            section.prefix, spec.infinity_symbol, section.suffix
        ));
    }

    let mut number = sections::scale_for_pattern(value, section.pattern);
    let mut prefix = section.prefix.to_string();
    let mut suffix = section.suffix.to_string();

    if let Some(patterns) = &spec.compact_patterns {
        if let Some(form) = compact::resolve_compact(number, patterns, spec, plural)? {
            number = form.number;
            prefix.push_str(&form.prefix);
            suffix.insert_str(0, &form.suffix);
        }
    }
    trace!("formatting {number} (from {value}) with prefix '{prefix}' and suffix '{suffix}'");

    let digits = digits::format_digits(
        number,
        spec.digit_strategy(),
        spec.rounding_mode,
        spec.rounding_increment,
    );
    // The sign is carried by the prefix and suffix
    let digits = digits.strip_prefix('-').unwrap_or(&digits);

    let digits = match spec.primary_grouping_size {
        Some(primary) if primary > 0 => {
            insert_grouping_separators(digits, primary, spec.secondary_grouping_size)
        }
        _ => digits.to_string(),
    };

    // Scientific notation and padding are not rendered
    if spec.padding.is_some() {
        debug!("padding requested but not rendered");
    }

    let assembled = format!("{prefix}{digits}{suffix}");
    trace!("assembled pattern text '{assembled}'");

    Ok(assembly::localize(&assembled, spec))
}
