//! Pattern text parsing module
//!
//! This module tokenizes pattern text into quoted literal runs and single characters,
//! removes literal quoting, and splits compact patterns around their digit placeholders.

mod compact;
mod literal;
mod tokens;

pub use compact::{CompactPattern, parse_compact_pattern};
pub use literal::remove_literal_quotes;
pub use tokens::{Token, Tokens, parse_quoted_literal, parse_token};
