use std::borrow::Cow;

/// Remove the quoting from a literal run
///
/// `'text'` loses its delimiters and every `''` inside becomes `'`. A bare `''` is a
/// single literal quote. Anything not wrapped in quotes is returned unchanged.
///
/// # Examples
/// ```
/// use locale_number_format::parser::remove_literal_quotes;
///
/// assert_eq!(remove_literal_quotes("'kr'"), "kr");
/// assert_eq!(remove_literal_quotes("'o''clock'"), "o'clock");
/// assert_eq!(remove_literal_quotes("''"), "'");
/// ```
pub fn remove_literal_quotes(literal: &str) -> Cow<'_, str> {
    if literal == "''" {
        return Cow::Borrowed("'");
    }

    match literal
        .strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
    {
        Some(inner) if inner.contains("''") => Cow::Owned(inner.replace("''", "'")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(literal),
    }
}
