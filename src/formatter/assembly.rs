use crate::parser::{Token, Tokens, remove_literal_quotes};
use crate::types::{FormatSpec, PatternSymbol};

/// Localize assembled pattern text
///
/// Quoted literal runs are unquoted and emitted as is. Every other character is replaced
/// by its locale glyph if it is a pattern symbol, else by the numbering system digit if
/// it is an ASCII digit and the spec has a numbering system, else kept.
pub(super) fn localize(assembled: &str, spec: &FormatSpec) -> String {
    let mut result = String::with_capacity(assembled.len());

    for token in Tokens::new(assembled) {
        match token {
            Token::Literal(literal) => result.push_str(&remove_literal_quotes(literal)),
            Token::Char(c) => {
                if let Some(symbol) = PatternSymbol::from_char(c) {
                    result.push_str(spec.symbols.glyph(symbol));
                } else if let Some(digit) = spec
                    .numbering_digits
                    .as_ref()
                    .and_then(|digits| digits.localize(c))
                {
                    result.push(digit);
                } else {
                    result.push(c);
                }
            }
        }
    }

    result
}
