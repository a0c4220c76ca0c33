use log::debug;

use crate::error::FormatError;
use crate::formatter::digits::round_fraction;
use crate::parser::parse_compact_pattern;
use crate::types::{CompactPatterns, FormatSpec, PluralCategory, PluralSelector};

/// A value rewritten for compact notation
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CompactForm {
    /// The value divided down to the compact pattern's magnitude
    pub number: f64,
    /// Pattern text to place after the sign prefix
    pub prefix: String,
    /// Pattern text to place before the sign suffix
    pub suffix: String,
}

/// Number of zeroes after the leading digit of the integer part of `|value|`
fn magnitude_zeroes(value: f64) -> usize {
    value.abs().floor().to_string().len().saturating_sub(1)
}

/// Resolve the compact form of a value
///
/// Returns `Ok(None)` when the value is below 1000. Otherwise the `-count-other` pattern
/// of the magnitude fixes the divisor; the divided value is rounded with the spec's
/// integer/fraction settings and its integer part picks the plural category, which in
/// turn picks the pattern whose prefix and suffix are used. Falls back to the
/// `-count-other` pattern when the category has no pattern of its own.
pub(super) fn resolve_compact(
    value: f64,
    patterns: &CompactPatterns,
    spec: &FormatSpec,
    plural: Option<&dyn PluralSelector>,
) -> Result<Option<CompactForm>, FormatError> {
    let zeroes = magnitude_zeroes(value);
    if zeroes < 3 {
        return Ok(None);
    }

    let default_key = CompactPatterns::key(zeroes, PluralCategory::Other);
    let default_pattern =
        patterns
            .get(&default_key)
            .ok_or_else(|| FormatError::MissingCompactPattern {
                key: default_key.clone(),
            })?;

    let digits = parse_compact_pattern(default_pattern)?.digits;
    let divisor = zeroes as i32 - (digits as i32 - 1);
    let number = value / 10f64.powi(divisor);

    let rounded = round_fraction(
        number,
        spec.maximum_fraction_digits,
        spec.rounding_mode,
        spec.rounding_increment,
    );
    let category = plural
        .map(|selector| selector.select(rounded.trunc()))
        .unwrap_or(PluralCategory::Other);

    let pattern = patterns
        .get(&CompactPatterns::key(zeroes, category))
        .unwrap_or(default_pattern);
    debug!("compact pattern '{pattern}' for {value} (divisor 10^{divisor}, category {category})");

    let parsed = parse_compact_pattern(pattern)?;
    Ok(Some(CompactForm {
        number,
        prefix: parsed.prefix.to_string(),
        suffix: parsed.suffix.to_string(),
    }))
}
