use winnow::combinator::{alt, repeat};
use winnow::token::{none_of, rest, take_while};
use winnow::{ModalResult, Parser};

use crate::error::FormatError;
use crate::parser::tokens::parse_quoted_literal;

/// A compact pattern split around its digit placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactPattern<'s> {
    /// Text before the digit placeholders, pattern syntax kept
    pub prefix: &'s str,
    /// Number of `0` digit placeholders
    pub digits: usize,
    /// Text after the digit placeholders, pattern syntax kept
    pub suffix: &'s str,
}

/// Parse the prefix: quoted literal runs and any character but `0`
fn parse_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    repeat(0.., alt((parse_quoted_literal.void(), none_of('0').void())))
        .map(|()| ())
        .take()
        .parse_next(input)
}

fn parse_compact_parts<'s>(input: &mut &'s str) -> ModalResult<CompactPattern<'s>> {
    (parse_prefix, take_while(1.., '0'), rest)
        .map(|(prefix, zeroes, suffix)| CompactPattern {
            prefix,
            digits: zeroes.len(),
            suffix,
        })
        .parse_next(input)
}

/// Parse a compact pattern such as `0K`, `¤00M` or `0 'Mio'.`
///
/// # Arguments
/// * `pattern` - The compact pattern text
///
/// # Returns
/// * `Result<CompactPattern, FormatError>` - The split pattern, or an error if it has no
///   digit placeholders
///
/// # Examples
/// ```
/// use locale_number_format::parser::parse_compact_pattern;
///
/// let pattern = parse_compact_pattern("00K").unwrap();
/// assert_eq!((pattern.prefix, pattern.digits, pattern.suffix), ("", 2, "K"));
/// ```
pub fn parse_compact_pattern(pattern: &str) -> Result<CompactPattern<'_>, FormatError> {
    let mut input = pattern;
    parse_compact_parts(&mut input).map_err(|_| FormatError::MalformedCompactPattern {
        pattern: pattern.to_string(),
    })
}
