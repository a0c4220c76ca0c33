use crate::types::{FormatSpec, PatternSymbol};

/// The pattern, prefix and suffix chosen for the sign of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SignSection<'a> {
    pub pattern: &'a str,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Select the positive or negative section of a spec
///
/// Only values strictly below zero take the negative section, so `-0.0` is formatted
/// as positive.
pub(super) fn select_section(value: f64, spec: &FormatSpec) -> SignSection<'_> {
    if value < 0.0 {
        SignSection {
            pattern: &spec.negative_pattern,
            prefix: &spec.negative_prefix,
            suffix: &spec.negative_suffix,
        }
    } else {
        SignSection {
            pattern: &spec.positive_pattern,
            prefix: &spec.positive_prefix,
            suffix: &spec.positive_suffix,
        }
    }
}

/// Scale a value for a percent (x100) or per-mille (x1000) pattern
pub(super) fn scale_for_pattern(value: f64, pattern: &str) -> f64 {
    if pattern.contains(PatternSymbol::PercentSign.as_char()) {
        value * 100.0
    } else if pattern.contains(PatternSymbol::PerMille.as_char()) {
        value * 1000.0
    } else {
        value
    }
}
