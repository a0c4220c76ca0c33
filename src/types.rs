//! Type definitions for number formatting
//!
//! This module defines the precompiled format specification consumed by the formatter,
//! together with the small value types it is built from: pattern symbols, glyph maps,
//! compact pattern tables, rounding modes and plural categories.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A symbol that may appear in pattern text and is replaced by a locale glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSymbol {
    /// Decimal separator (.)
    Decimal,
    /// Grouping separator (,)
    Group,
    /// Minus sign (-)
    MinusSign,
    /// Plus sign (+)
    PlusSign,
    /// Exponent marker (E)
    Exponential,
    /// Percent sign (%)
    PercentSign,
    /// Per-mille sign (‰)
    PerMille,
}

impl PatternSymbol {
    /// Recognize a pattern symbol character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Decimal),
            ',' => Some(Self::Group),
            '-' => Some(Self::MinusSign),
            '+' => Some(Self::PlusSign),
            'E' => Some(Self::Exponential),
            '%' => Some(Self::PercentSign),
            '\u{2030}' => Some(Self::PerMille),
            _ => None,
        }
    }

    /// The character used for this symbol in pattern text
    pub fn as_char(self) -> char {
        match self {
            Self::Decimal => '.',
            Self::Group => ',',
            Self::MinusSign => '-',
            Self::PlusSign => '+',
            Self::Exponential => 'E',
            Self::PercentSign => '%',
            Self::PerMille => '\u{2030}',
        }
    }
}

/// Locale glyphs for every pattern symbol
///
/// Every symbol has a glyph, so a lookup can never miss.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SymbolMap {
    pub decimal: String,
    pub group: String,
    pub minus_sign: String,
    pub plus_sign: String,
    pub exponential: String,
    pub percent_sign: String,
    pub per_mille: String,
}

impl Default for SymbolMap {
    /// The identity map: every symbol renders as its pattern character
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            group: ",".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            exponential: "E".to_string(),
            percent_sign: "%".to_string(),
            per_mille: "\u{2030}".to_string(),
        }
    }
}

impl SymbolMap {
    /// Get the glyph for a pattern symbol
    pub fn glyph(&self, symbol: PatternSymbol) -> &str {
        match symbol {
            PatternSymbol::Decimal => &self.decimal,
            PatternSymbol::Group => &self.group,
            PatternSymbol::MinusSign => &self.minus_sign,
            PatternSymbol::PlusSign => &self.plus_sign,
            PatternSymbol::Exponential => &self.exponential,
            PatternSymbol::PercentSign => &self.percent_sign,
            PatternSymbol::PerMille => &self.per_mille,
        }
    }

    pub fn with_decimal(mut self, glyph: impl Into<String>) -> Self {
        self.decimal = glyph.into();
        self
    }

    pub fn with_group(mut self, glyph: impl Into<String>) -> Self {
        self.group = glyph.into();
        self
    }

    pub fn with_minus_sign(mut self, glyph: impl Into<String>) -> Self {
        self.minus_sign = glyph.into();
        self
    }

    pub fn with_plus_sign(mut self, glyph: impl Into<String>) -> Self {
        self.plus_sign = glyph.into();
        self
    }

    pub fn with_exponential(mut self, glyph: impl Into<String>) -> Self {
        self.exponential = glyph.into();
        self
    }

    pub fn with_percent_sign(mut self, glyph: impl Into<String>) -> Self {
        self.percent_sign = glyph.into();
        self
    }

    pub fn with_per_mille(mut self, glyph: impl Into<String>) -> Self {
        self.per_mille = glyph.into();
        self
    }
}

/// Digit glyphs of a numbering system, indexed by digit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct NumberingDigits([char; 10]);

impl NumberingDigits {
    pub fn new(digits: [char; 10]) -> Self {
        Self(digits)
    }

    /// Get the glyph for an ASCII decimal digit, `None` for any other character
    pub fn localize(&self, c: char) -> Option<char> {
        c.to_digit(10).map(|d| self.0[d as usize])
    }
}

impl TryFrom<&str> for NumberingDigits {
    type Error = String;

    fn try_from(digits: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = digits.chars().collect();
        let array: [char; 10] = chars.try_into().map_err(|chars: Vec<char>| {
            format!(
                "numbering system must list exactly 10 digits, got {}",
                chars.len()
            )
        })?;
        Ok(Self(array))
    }
}

impl TryFrom<String> for NumberingDigits {
    type Error = String;

    fn try_from(digits: String) -> Result<Self, Self::Error> {
        Self::try_from(digits.as_str())
    }
}

/// CLDR plural categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a number to its plural category
///
/// Implemented for any `Fn(f64) -> PluralCategory`, so a closure can be passed directly.
pub trait PluralSelector {
    fn select(&self, number: f64) -> PluralCategory;
}

impl<F> PluralSelector for F
where
    F: Fn(f64) -> PluralCategory,
{
    fn select(&self, number: f64) -> PluralCategory {
        self(number)
    }
}

/// Compact patterns keyed by magnitude and plural category
///
/// Keys follow the CLDR convention `"1" + zeroes + "-count-" + category`,
/// e.g. `1000-count-one`. See [`CompactPatterns::key`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct CompactPatterns(BTreeMap<String, String>);

impl CompactPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lookup key for a magnitude (number of zeroes) and plural category
    pub fn key(zeroes: usize, category: PluralCategory) -> String {
        format!("1{}-count-{}", "0".repeat(zeroes), category)
    }

    pub fn insert(&mut self, key: impl Into<String>, pattern: impl Into<String>) {
        self.0.insert(key.into(), pattern.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CompactPatterns
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Rounding method applied when digits are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round half toward positive infinity
    #[default]
    Round,
    /// Round toward positive infinity
    Ceil,
    /// Round toward negative infinity
    Floor,
    /// Round toward zero
    Truncate,
}

impl RoundingMode {
    /// Round a value to an integer
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::Round => {
                let floor = value.floor();
                if value - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            }
            RoundingMode::Ceil => value.ceil(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Truncate => value.trunc(),
        }
    }
}

/// The digit rounding strategy of a format spec
///
/// The two strategies are mutually exclusive; see [`FormatSpec::digit_strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitStrategy {
    /// Round to a number of significant digits
    SignificantDigits { minimum: u32, maximum: u32 },
    /// Round to a number of fraction digits, padding integer and fraction
    IntegerFraction {
        minimum_integer: u32,
        minimum_fraction: u32,
        maximum_fraction: u32,
    },
}

/// A precompiled number format
///
/// Prefixes, suffixes and patterns hold pattern text: symbols such as `-` or `%` are
/// mapped to locale glyphs when the output is assembled, and quoted runs like `'kr'`
/// are emitted literally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    /// Padding character (not rendered)
    pub padding: Option<char>,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub rounding_increment: Option<f64>,
    pub primary_grouping_size: Option<u32>,
    pub secondary_grouping_size: Option<u32>,
    pub positive_pattern: String,
    pub negative_pattern: String,
    pub positive_prefix: String,
    pub positive_suffix: String,
    pub negative_prefix: String,
    pub negative_suffix: String,
    pub rounding_mode: RoundingMode,
    pub nan_symbol: String,
    pub infinity_symbol: String,
    pub symbols: SymbolMap,
    pub numbering_digits: Option<NumberingDigits>,
    pub compact_patterns: Option<CompactPatterns>,
}

impl Default for FormatSpec {
    /// The root decimal format `#,##0.###`
    fn default() -> Self {
        Self {
            padding: None,
            minimum_integer_digits: 1,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            minimum_significant_digits: None,
            maximum_significant_digits: None,
            rounding_increment: None,
            primary_grouping_size: Some(3),
            secondary_grouping_size: None,
            positive_pattern: "#,##0.###".to_string(),
            negative_pattern: "-#,##0.###".to_string(),
            positive_prefix: String::new(),
            positive_suffix: String::new(),
            negative_prefix: "-".to_string(),
            negative_suffix: String::new(),
            rounding_mode: RoundingMode::Round,
            nan_symbol: "NaN".to_string(),
            infinity_symbol: "\u{221e}".to_string(),
            symbols: SymbolMap::default(),
            numbering_digits: None,
            compact_patterns: None,
        }
    }
}

impl FormatSpec {
    /// Select the digit rounding strategy
    ///
    /// Significant-digit rounding applies only when both significant bounds are set;
    /// the integer and fraction bounds are ignored in that case.
    pub fn digit_strategy(&self) -> DigitStrategy {
        match (
            self.minimum_significant_digits,
            self.maximum_significant_digits,
        ) {
            (Some(minimum), Some(maximum)) => DigitStrategy::SignificantDigits { minimum, maximum },
            _ => DigitStrategy::IntegerFraction {
                minimum_integer: self.minimum_integer_digits,
                minimum_fraction: self.minimum_fraction_digits,
                maximum_fraction: self.maximum_fraction_digits,
            },
        }
    }

    /// Set both the positive and negative pattern, prefix and suffix
    pub fn with_patterns(
        mut self,
        positive: (&str, &str, &str),
        negative: (&str, &str, &str),
    ) -> Self {
        let (pattern, prefix, suffix) = positive;
        self.positive_pattern = pattern.to_string();
        self.positive_prefix = prefix.to_string();
        self.positive_suffix = suffix.to_string();

        let (pattern, prefix, suffix) = negative;
        self.negative_pattern = pattern.to_string();
        self.negative_prefix = prefix.to_string();
        self.negative_suffix = suffix.to_string();
        self
    }

    pub fn with_integer_digits(mut self, minimum: u32) -> Self {
        self.minimum_integer_digits = minimum;
        self
    }

    pub fn with_fraction_digits(mut self, minimum: u32, maximum: u32) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }

    pub fn with_significant_digits(mut self, minimum: u32, maximum: u32) -> Self {
        self.minimum_significant_digits = Some(minimum);
        self.maximum_significant_digits = Some(maximum);
        self
    }

    pub fn with_rounding(mut self, mode: RoundingMode, increment: Option<f64>) -> Self {
        self.rounding_mode = mode;
        self.rounding_increment = increment;
        self
    }

    pub fn with_grouping(mut self, primary: Option<u32>, secondary: Option<u32>) -> Self {
        self.primary_grouping_size = primary;
        self.secondary_grouping_size = secondary;
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolMap) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_numbering_digits(mut self, digits: NumberingDigits) -> Self {
        self.numbering_digits = Some(digits);
        self
    }

    pub fn with_compact_patterns(mut self, patterns: CompactPatterns) -> Self {
        self.compact_patterns = Some(patterns);
        self
    }
}
