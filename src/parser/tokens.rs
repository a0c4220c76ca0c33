use winnow::combinator::{alt, fail};
use winnow::token::any;
use winnow::{ModalResult, Parser};

/// A token of assembled pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'s> {
    /// A quoted literal run, delimiters and escapes included (e.g. `'o''clock'`)
    Literal(&'s str),
    /// Any other single character
    Char(char),
}

/// Parse a quoted literal run
///
/// Matches `'([^']|'')+'` or a bare `''`. A doubled quote inside the run is an escaped
/// quote unless the run cannot be closed afterwards, in which case the longest run that
/// does close is taken. Returns the raw run, quotes included.
pub fn parse_quoted_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let text: &'s str = *input;
    if !text.starts_with('\'') {
        return fail(input);
    }

    let mut pos = 1;
    let mut end = None;
    while let Some(offset) = text[pos..].find('\'') {
        let quote = pos + offset;
        end = Some(quote + 1);
        if text[quote + 1..].starts_with('\'') {
            // Escaped quote; keep scanning for the closing one
            pos = quote + 2;
        } else {
            break;
        }
    }

    match end {
        Some(end) => {
            let (literal, rest) = text.split_at(end);
            *input = rest;
            Ok(literal)
        }
        None => fail(input),
    }
}

/// Parse a single token: a quoted literal run, or else one character
pub fn parse_token<'s>(input: &mut &'s str) -> ModalResult<Token<'s>> {
    alt((
        parse_quoted_literal.map(Token::Literal),
        any.map(Token::Char),
    ))
    .parse_next(input)
}

/// Lazy, single-pass tokenizer over assembled pattern text
#[derive(Debug, Clone)]
pub struct Tokens<'s> {
    input: &'s str,
}

impl<'s> Tokens<'s> {
    pub fn new(input: &'s str) -> Self {
        Self { input }
    }
}

impl<'s> Iterator for Tokens<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() {
            return None;
        }
        parse_token.parse_next(&mut self.input).ok()
    }
}
